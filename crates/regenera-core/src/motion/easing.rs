//! Progress curves for the impact counters

use crate::config::EasingType;

impl EasingType {
    /// Eased share of the target a counter shows once `t` of its run has
    /// elapsed. `t` outside [0, 1] is clamped.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
        }
    }
}

/// `1 - (1 - t)^3`: exact at both ends, so the last frame lands on the target
pub fn cubic_ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_start_at_zero_and_end_at_one() {
        for easing in [EasingType::Linear, EasingType::Cubic] {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_curves_never_step_back() {
        for easing in [EasingType::Linear, EasingType::Cubic] {
            let samples: Vec<f64> = (0..=60).map(|step| easing.apply(step as f64 / 60.0)).collect();
            assert!(
                samples.windows(2).all(|pair| pair[0] <= pair[1]),
                "{:?} decreased",
                easing
            );
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(EasingType::Cubic.apply(-0.5), 0.0);
        assert_eq!(EasingType::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn test_cubic_runs_ahead_of_linear() {
        // A 2000 ms run a quarter of the way in
        assert!((cubic_ease_out(0.25) - 0.578125).abs() < 1e-12);
        assert!(EasingType::Cubic.apply(0.25) > EasingType::Linear.apply(0.25));
        assert!((cubic_ease_out(0.5) - 0.875).abs() < 1e-12);
    }
}
