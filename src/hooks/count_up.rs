use yew::prelude::*;

use super::frame_loop::FrameLoop;

pub fn ease_out_quart(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(4)
}

/// Eased progression from zero to `target` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms: duration_ms as f64,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, progress: f64) -> u32 {
        let progress = progress.clamp(0.0, 1.0);
        // Land exactly on the target instead of trusting the float.
        if progress >= 1.0 {
            return self.target;
        }
        (ease_out_quart(progress) * self.target as f64).floor() as u32
    }
}

/// Counts from 0 to `target` once `start` first becomes true. Later
/// flips of `start` are ignored; the frame loop is cancelled on unmount.
#[hook]
pub fn use_count_up(target: u32, duration_ms: u32, start: bool) -> u32 {
    let count = use_state_eq(|| 0u32);
    let started = use_mut_ref(|| false);
    let animation = use_mut_ref(|| None::<FrameLoop>);

    {
        let setter = count.setter();
        let animation = animation.clone();
        use_effect_with_deps(
            move |start| {
                if *start && !*started.borrow() {
                    *started.borrow_mut() = true;
                    let counter = CountUp::new(target, duration_ms);
                    let mut first_frame = None;
                    *animation.borrow_mut() = FrameLoop::start(move |now| {
                        let began = *first_frame.get_or_insert(now);
                        let progress = counter.progress(now - began);
                        setter.set(counter.value_at(progress));
                        progress < 1.0
                    });
                }
                || ()
            },
            start,
        );
    }

    use_effect_with_deps(
        move |_| {
            move || {
                animation.borrow_mut().take();
            }
        },
        (),
    );

    *count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_pinned_at_both_ends() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(-3.0), 0.0);
        assert_eq!(ease_out_quart(7.0), 1.0);
    }

    #[test]
    fn five_hundred_over_two_seconds() {
        let counter = CountUp::new(500, 2000);
        assert_eq!(counter.value_at(counter.progress(0.0)), 0);
        assert_eq!(counter.value_at(counter.progress(2000.0)), 500);
        assert_eq!(counter.value_at(counter.progress(2500.0)), 500);

        let mut last = 0;
        for ms in 0..=2000 {
            let value = counter.value_at(counter.progress(ms as f64));
            assert!(value >= last, "dropped from {} to {} at {}ms", last, value, ms);
            assert!(value <= 500);
            last = value;
        }
        assert_eq!(last, 500);
    }

    #[test]
    fn ease_out_front_loads_the_count() {
        let counter = CountUp::new(100, 2000);
        // 1 - 0.5^4 = 0.9375
        assert_eq!(counter.value_at(0.5), 93);
    }

    #[test]
    fn progress_is_clamped() {
        let counter = CountUp::new(15, 2000);
        assert_eq!(counter.progress(-10.0), 0.0);
        assert_eq!(counter.progress(1000.0), 0.5);
        assert_eq!(counter.progress(4000.0), 1.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let counter = CountUp::new(50, 0);
        assert_eq!(counter.progress(0.0), 1.0);
        assert_eq!(counter.value_at(counter.progress(0.0)), 50);
    }

    #[test]
    fn lands_on_targets_where_float_would_undershoot() {
        for target in [1, 3, 7, 15, 50, 99, 100, 500, 1_000_000] {
            let counter = CountUp::new(target, 2000);
            assert_eq!(counter.value_at(1.0), target);
            assert!(counter.value_at(0.999_999) <= target);
        }
    }
}
