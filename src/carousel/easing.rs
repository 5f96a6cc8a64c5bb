/// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
///
/// The curve starts at (0, 0) and ends at (1, 1). `ease` maps linear progress
/// in `[0, 1]` to eased progress by solving the curve's x polynomial for the
/// parameter `t` and evaluating y at that `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

const NEWTON_ITERATIONS: usize = 8;
const EPSILON: f32 = 1e-6;

impl CubicBezier {
    /// Quick start, soft landing. Used for every carousel slide.
    pub const SMOOTH: CubicBezier = CubicBezier::new(0.25, 0.46, 0.45, 0.94);

    pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn ease(&self, progress: f32) -> f32 {
        if progress <= 0.0 || progress.is_nan() {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(progress);
        sample(self.y1, self.y2, t)
    }

    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = sample(self.x1, self.x2, t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let slope = derivative(self.x1, self.x2, t);
            if slope.abs() < EPSILON {
                break;
            }
            t -= err / slope;
        }

        // Newton failed to converge (flat slope), bisect instead
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        while hi - lo > EPSILON {
            let value = sample(self.x1, self.x2, t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::SMOOTH
    }
}

fn coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

fn sample(p1: f32, p2: f32, t: f32) -> f32 {
    let (a, b, c) = coefficients(p1, p2);
    ((a * t + b) * t + c) * t
}

fn derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let (a, b, c) = coefficients(p1, p2);
    (3.0 * a * t + 2.0 * b) * t + c
}
