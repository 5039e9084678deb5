// Easing curves for marker and label transitions

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum EasingType {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    #[default]
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutBounce,
}

impl EasingType {
    /// Apply easing function to progress
    pub fn apply(&self, t: f64) -> f64 {
        // https://easings.net/
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseInQuad => t * t,
            EasingType::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EasingType::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingType::EaseInCubic => t * t * t,
            EasingType::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingType::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingType::EaseOutBounce => {
                let n1 = 7.5625;
                let d1 = 2.75;
                if t < 1.0 / d1 {
                    n1 * t * t
                } else if t < 2.0 / d1 {
                    let t = t - 1.5 / d1;
                    n1 * t * t + 0.75
                } else if t < 2.5 / d1 {
                    let t = t - 2.25 / d1;
                    n1 * t * t + 0.9375
                } else {
                    let t = t - 2.625 / d1;
                    n1 * t * t + 0.984375
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 8] = [
        EasingType::Linear,
        EasingType::EaseInQuad,
        EasingType::EaseOutQuad,
        EasingType::EaseInOutQuad,
        EasingType::EaseInCubic,
        EasingType::EaseOutCubic,
        EasingType::EaseInOutCubic,
        EasingType::EaseOutBounce,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_in_out_quad_is_symmetric() {
        let easing = EasingType::EaseInOutQuad;
        assert_eq!(easing.apply(0.5), 0.5);
        assert!((easing.apply(0.25) + easing.apply(0.75) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-1.0), 0.0);
        assert_eq!(EasingType::Linear.apply(2.0), 1.0);
    }
}
