//! Easing curves.

/// Easing functions matching the Compose/Material names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowInEasing,
    LinearOutSlowInEasing,
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Solves the x(t) = fraction bezier for t and returns y(t).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson first, bisection when the slope flattens out.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let error = curve(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            solved = true;
            break;
        }
        let dx = slope(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - error / dx).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let error = curve(ax, bx, cx, t) - fraction;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
    }

    curve(ay, by, cy, t)
}
