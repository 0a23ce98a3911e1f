//! Auto-scroll to the newest message.
//!
//! Offsets here are positive distances from the top of the content. The view
//! layer converts to and from its own sign convention.

use std::time::{Duration, Instant};

/// Snapshot of the scroll region taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollViewport {
    pub offset: f32,
    pub max_offset: f32,
    pub height: f32,
}

impl ScrollViewport {
    pub fn new(offset: f32, max_offset: f32, height: f32) -> Self {
        Self {
            offset,
            max_offset,
            height,
        }
    }

    /// A region without laid-out height has not been mounted yet.
    pub fn is_mounted(&self) -> bool {
        self.height > 0.0
    }

    pub fn tail(&self) -> f32 {
        self.max_offset.max(0.0)
    }
}

/// What the view should do with its scroll offset this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollStep {
    /// Nothing requested.
    Idle,
    /// A request was dropped because the region is not mounted.
    Skipped,
    /// Move to `offset`. `settled` is false while an animation is running.
    Set { offset: f32, settled: bool },
}

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    started_at: Instant,
    duration: Duration,
    last_tail: Option<f32>,
}

/// Fire-and-forget scroll-to-tail requests with optional easing.
#[derive(Debug, Clone)]
pub struct AutoScroll {
    smooth: bool,
    duration: Duration,
    pending: bool,
    animation: Option<ScrollAnimation>,
}

impl AutoScroll {
    pub fn new(smooth: bool, duration: Duration) -> Self {
        Self {
            smooth,
            duration,
            pending: false,
            animation: None,
        }
    }

    pub fn request_scroll_to_tail(&mut self) {
        self.pending = true;
    }

    pub fn has_pending_request(&self) -> bool {
        self.pending
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advances one frame.
    ///
    /// A pending request supersedes any running animation and restarts from
    /// the current offset. The tail is re-read every frame, and a run only
    /// settles once it has reached a tail that did not move since the
    /// previous frame: the frame that commits a new message still reports
    /// the old content height.
    pub fn step(&mut self, viewport: ScrollViewport, now: Instant) -> ScrollStep {
        if std::mem::take(&mut self.pending) {
            if !viewport.is_mounted() {
                self.animation = None;
                return ScrollStep::Skipped;
            }

            let duration = if self.smooth {
                self.duration
            } else {
                Duration::ZERO
            };
            self.animation = Some(ScrollAnimation {
                from: viewport.offset,
                started_at: now,
                duration,
                last_tail: None,
            });
        }

        let Some(mut animation) = self.animation else {
            return ScrollStep::Idle;
        };

        if !viewport.is_mounted() {
            self.animation = None;
            return ScrollStep::Skipped;
        }

        let target = viewport.tail();
        let progress = if animation.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(animation.started_at);
            (elapsed.as_secs_f32() / animation.duration.as_secs_f32()).min(1.0)
        };

        let offset = if progress >= 1.0 {
            target
        } else {
            animation.from + (target - animation.from) * ease_out_cubic(progress)
        };
        let settled = progress >= 1.0 && animation.last_tail == Some(target);

        animation.last_tail = Some(target);
        self.animation = (!settled).then_some(animation);

        ScrollStep::Set { offset, settled }
    }
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self::new(
            true,
            Duration::from_millis(crate::settings::DEFAULT_SCROLL_DURATION_MS),
        )
    }
}

fn ease_out_cubic(progress: f32) -> f32 {
    1.0 - (1.0 - progress).powi(3)
}
