use glam::DVec2;

/// Coalesces bursts of pointer moves into one update per animation frame.
///
/// `record` stores the newest position and reports whether a flush has to be
/// scheduled; `flush` runs inside that frame callback and yields the position
/// to apply. A pointer that leaves before the flush yields nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerThrottle {
    latest: Option<DVec2>,
    pending: bool,
}

impl PointerThrottle {
    pub fn record(&mut self, pos: DVec2) -> bool {
        self.latest = Some(pos);
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn flush(&mut self) -> Option<DVec2> {
        self.pending = false;
        self.latest.take()
    }

    pub fn leave(&mut self) {
        self.latest = None;
    }

    #[allow(dead_code)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Client coordinates relative to a container's top-left corner.
#[inline]
pub fn pointer_in_container(client_x: f64, client_y: f64, left: f64, top: f64) -> DVec2 {
    DVec2::new(client_x - left, client_y - top)
}
