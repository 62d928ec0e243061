use std::time::Duration;

use egui::emath::easing;
use log::debug;

pub const PROGRESS_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// Accelerate-decelerate timing curve over `t` in `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    easing::sin_in_out(t.clamp(0.0, 1.0))
}

/// Interpolation of the displayed progress from one value to another.
///
/// The clock starts on the first tick, so the first value produced is always `from`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    started_at: Option<f64>,
}

impl ProgressAnimation {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            started_at: None,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    fn fraction(&self, now: f64) -> f32 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };

        let duration = self.duration.as_secs_f64();
        if duration <= 0.0 {
            return 1.0;
        }

        ((now - started_at) / duration).clamp(0.0, 1.0) as f32
    }

    /// The interpolated value at `now` (in seconds, any monotonic origin).
    pub fn value_at(&mut self, now: f64) -> f32 {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        let t = self.fraction(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.fraction(now) >= 1.0
    }
}

/// Owns the one animation allowed to write the displayed progress.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    active: Option<ProgressAnimation>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever is running. The old animation is dropped before the new one can tick.
    pub fn start(&mut self, from: f32, to: f32) {
        self.cancel();
        debug!("Animating progress from {} to {}.", from, to);
        self.active = Some(ProgressAnimation::new(from, to, PROGRESS_ANIMATION_DURATION));
    }

    pub fn cancel(&mut self) {
        if let Some(animation) = self.active.take() {
            debug!("Cancelled progress animation toward {}.", animation.target());
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Advances the running animation and returns the value to display. Finished animations are released.
    pub fn tick(&mut self, now: f64) -> Option<f32> {
        let animation = self.active.as_mut()?;
        let value = animation.value_at(now);

        if animation.is_finished(now) {
            self.active = None;
        }

        Some(value)
    }
}
