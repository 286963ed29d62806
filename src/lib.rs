#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod hover;
mod input;
mod nav;
mod portfolio;
mod render;
mod reveal;
mod team;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pointcloud-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::ready(&document).await?;

    // The particle page keeps native scrolling; every other page scrolls smoothly.
    let has_canvas = document
        .get_element_by_id(constants::PARTICLE_CANVAS_ID)
        .is_some();
    if !has_canvas {
        dom::enable_smooth_scroll(&document);
    }

    nav::wire(&document);
    hover::wire(&document);
    reveal::wire(&document);
    portfolio::wire(&document);
    team::wire(&document);
    events::wire_line_width(&document);

    if has_canvas {
        // Let layout settle so the container reports its final size.
        dom::sleep(constants::LAYOUT_SETTLE_MS).await?;
        frame::init_cloud(&document)?;
    }
    Ok(())
}
