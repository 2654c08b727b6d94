//! Progress bar animation state

use std::time::{Duration, Instant};

/// Eases the drawn progress bar toward the model's percentage
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    /// When the current transition started
    start_time: Instant,
    from: f32,
    to: f32,
}

impl ProgressAnimation {
    /// Duration of one transition
    const ANIMATION_DURATION: Duration = Duration::from_millis(300);

    pub fn new(percent: u16) -> Self {
        Self {
            start_time: Instant::now(),
            from: percent as f32,
            to: percent as f32,
        }
    }

    /// Start easing toward `percent` from wherever the bar is now
    pub fn retarget(&mut self, percent: u16) {
        self.retarget_at(percent, Instant::now());
    }

    fn retarget_at(&mut self, percent: u16, now: Instant) {
        let target = percent as f32;
        if (target - self.to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.start_time = now;
    }

    /// Percentage to draw right now
    pub fn value(&self) -> f32 {
        self.value_at(Instant::now())
    }

    fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed >= Self::ANIMATION_DURATION {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
        // Cubic ease-out for smooth deceleration
        let eased = simple_easing::cubic_out(progress);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.elapsed() < Self::ANIMATION_DURATION
            && (self.to - self.from).abs() >= f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rests_at_percent() {
        let anim = ProgressAnimation::new(20);
        assert_eq!(anim.value(), 20.0);
        assert!(!anim.is_animating());
    }

    #[test]
    fn test_retarget_same_value_is_noop() {
        let mut anim = ProgressAnimation::new(40);
        let start = anim.start_time;
        anim.retarget(40);
        assert_eq!(anim.start_time, start);
    }

    #[test]
    fn test_value_moves_between_endpoints() {
        let mut anim = ProgressAnimation::new(20);
        let now = Instant::now();
        anim.retarget_at(40, now);

        assert_eq!(anim.value_at(now), 20.0);
        let mid = anim.value_at(now + Duration::from_millis(150));
        assert!(mid > 20.0 && mid < 40.0, "mid = {mid}");
        assert_eq!(anim.value_at(now + Duration::from_millis(300)), 40.0);
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current_value() {
        let mut anim = ProgressAnimation::new(20);
        let now = Instant::now();
        anim.retarget_at(60, now);
        let later = now + Duration::from_millis(100);
        let current = anim.value_at(later);
        anim.retarget_at(40, later);

        assert_eq!(anim.value_at(later), current);
        assert_eq!(anim.value_at(later + Duration::from_millis(300)), 40.0);
    }
}
