use std::time::Instant;

use gpui::{ScrollHandle, point, px};
use murmur_chat::{AutoScroll, ChatSettings, ScrollStep, ScrollViewport};

/// Drives a GPUI scroll handle from [`AutoScroll`] decisions.
pub struct ScrollManager {
    scroll_handle: ScrollHandle,
    auto_scroll: AutoScroll,
}

impl ScrollManager {
    pub fn new(settings: &ChatSettings) -> Self {
        Self {
            scroll_handle: ScrollHandle::new(),
            auto_scroll: AutoScroll::new(settings.smooth_scroll, settings.scroll_duration()),
        }
    }

    pub fn handle(&self) -> &ScrollHandle {
        &self.scroll_handle
    }

    pub fn request_scroll_to_latest(&mut self) {
        self.auto_scroll.request_scroll_to_tail();
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.auto_scroll.has_pending_request()
    }

    /// Applies this frame's scroll step. Returns true while another frame is
    /// needed to finish the scroll.
    pub fn apply_pending_scroll(&mut self, now: Instant) -> bool {
        match self.auto_scroll.step(self.viewport(), now) {
            ScrollStep::Idle => false,
            ScrollStep::Skipped => {
                tracing::debug!("message region not mounted, skipped auto-scroll");
                false
            }
            ScrollStep::Set { offset, settled } => {
                let current_x = self.scroll_handle.offset().x;
                // GPUI scrolls down with negative Y offsets.
                self.scroll_handle.set_offset(point(current_x, px(-offset)));
                !settled
            }
        }
    }

    fn viewport(&self) -> ScrollViewport {
        let offset = self.scroll_handle.offset().y;
        let max_offset = self.scroll_handle.max_offset().height;
        let height = self.scroll_handle.bounds().size.height;

        ScrollViewport::new(
            -f32::from(offset),
            f32::from(max_offset),
            f32::from(height).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use gpui::Pixels;

    use super::*;

    #[test]
    fn unmounted_handle_skips_and_leaves_offset() {
        let mut manager = ScrollManager::new(&ChatSettings::default());
        manager.request_scroll_to_latest();

        assert!(!manager.apply_pending_scroll(Instant::now()));
        assert_eq!(manager.handle().offset().y, Pixels::ZERO);
        // The dropped request does not linger into later frames.
        assert!(!manager.apply_pending_scroll(Instant::now()));
    }

    #[test]
    fn idle_without_request() {
        let mut manager = ScrollManager::new(&ChatSettings::default());
        assert!(!manager.apply_pending_scroll(Instant::now()));
    }

    #[test]
    fn request_is_pending_until_a_frame_consumes_it() {
        let mut manager = ScrollManager::new(&ChatSettings::default());
        assert!(!manager.has_pending_scroll());

        manager.request_scroll_to_latest();
        assert!(manager.has_pending_scroll());

        manager.apply_pending_scroll(Instant::now());
        assert!(!manager.has_pending_scroll());
    }
}
