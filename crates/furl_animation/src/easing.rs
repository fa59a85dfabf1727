//! Easing functions for transitions
//!
//! The named curves match their CSS `transition-timing-function` keywords, so
//! `EaseInOut` is `cubic-bezier(0.42, 0, 0.58, 1)`.

use serde::{Deserialize, Serialize};

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInOutCubic,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Ease => bezier(t, 0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => bezier(t, 0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => bezier(t, 0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => bezier(t, 0.42, 0.0, 0.58, 1.0),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => bezier(t, x1, y1, x2, y2),
        }
    }
}

fn bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Endpoints are exact
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let curve = Curve::new(x1 as f64, y1 as f64, x2 as f64, y2 as f64);
    curve.y_for_x(t as f64) as f32
}

/// One axis of a unit cubic bezier, in power-basis form
#[derive(Clone, Copy)]
struct Axis {
    a: f64,
    b: f64,
    c: f64,
}

impl Axis {
    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self {
            a: 1.0 - c - b,
            b,
            c,
        }
    }

    #[inline]
    fn sample(&self, s: f64) -> f64 {
        ((self.a * s + self.b) * s + self.c) * s
    }

    #[inline]
    fn slope(&self, s: f64) -> f64 {
        (3.0 * self.a * s + 2.0 * self.b) * s + self.c
    }
}

struct Curve {
    x: Axis,
    y: Axis,
}

impl Curve {
    const EPSILON: f64 = 1e-7;

    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x: Axis::new(x1, x2),
            y: Axis::new(y1, y2),
        }
    }

    fn y_for_x(&self, x: f64) -> f64 {
        self.y.sample(self.solve_s(x))
    }

    /// Find the curve parameter whose x equals `x`: Newton first, bisection when the slope flattens
    fn solve_s(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..8 {
            let err = self.x.sample(s) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let slope = self.x.slope(s);
            if slope.abs() < Self::EPSILON {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        for _ in 0..32 {
            let value = self.x.sample(s);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInOutCubic,
        Easing::CubicBezier(0.2, 0.8, 0.2, 1.0),
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::EaseInOut.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseInOut.apply(1.5), 1.0);
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
        for t in [0.1, 0.25, 0.4] {
            let a = Easing::EaseInOut.apply(t);
            let b = Easing::EaseInOut.apply(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-4, "t={} a={} b={}", t, a, b);
        }
    }

    #[test]
    fn test_ease_in_starts_slow() {
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for i in 1..=100 {
                let value = easing.apply(i as f32 / 100.0);
                assert!(value + 1e-5 >= previous, "{:?} at {}", easing, i);
                previous = value;
            }
        }
    }

    #[test]
    fn test_linear_bezier_matches_linear() {
        let curve = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for t in [0.1f32, 0.33, 0.7] {
            assert!((curve.apply(t) - t).abs() < 1e-4);
        }
    }
}
