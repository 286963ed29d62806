pub mod pointer;
pub mod resize;

pub use pointer::wire_pointer;
pub use resize::{wire_canvas_resize, wire_line_width, ResizeWiring};
