use tracing::{trace, warn};

/// Magnitude above which the sums are considered to be overflowing.
///
/// Roughly eight years of monotonic clock time in nanoseconds.
pub const OVERFLOW_MAGNITUDE: f64 = 1e72;

/// Smallest weighted variance of x that [`LinearFit::interpolate`] will fit a
/// line through.
const SINGULAR_TOLERANCE: f64 = 1e-5;

/// Sufficient statistics for a weighted least-squares fit of `y = a * x + b`.
///
/// Every contribution is linear in its weight, so a sample added with weight
/// `w` is taken back out by adding it again with `-w`, and [`scale`] decays
/// everything accumulated so far.
///
/// [`scale`]: LinearFit::scale
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LinearFit {
    w: f64,
    x: f64,
    y: f64,
    xx: f64,
    yy: f64,
    xy: f64,
}

impl LinearFit {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn add(&mut self, x: f64, y: f64, w: f64) {
        self.w += w;
        self.x += w * x;
        self.y += w * y;
        self.xx += w * x * x;
        self.xy += w * x * y;
        self.yy += w * y * y;
    }

    /// Takes back a sample previously added with unit weight.
    #[inline]
    pub fn remove(&mut self, x: f64, y: f64) {
        self.add(x, y, -1.0);
    }

    #[inline]
    pub fn combine(&mut self, other: &LinearFit) {
        self.w += other.w;
        self.x += other.x;
        self.y += other.y;
        self.xx += other.xx;
        self.xy += other.xy;
        self.yy += other.yy;
    }

    #[inline]
    pub fn scale(&mut self, factor: f64) {
        self.w *= factor;
        self.x *= factor;
        self.y *= factor;
        self.xx *= factor;
        self.xy *= factor;
        self.yy *= factor;
    }

    pub fn weight(&self) -> f64 {
        self.w
    }

    pub fn sum_x(&self) -> f64 {
        self.x
    }

    pub fn sum_y(&self) -> f64 {
        self.y
    }

    pub fn sum_xx(&self) -> f64 {
        self.xx
    }

    pub fn sum_yy(&self) -> f64 {
        self.yy
    }

    pub fn sum_xy(&self) -> f64 {
        self.xy
    }

    /// Slope and intercept from the weight-normalized sums. `None` when the
    /// fit carries no positive weight or its x values do not spread.
    #[inline]
    fn line(&self) -> Option<(f64, f64)> {
        if self.w <= 0.0 || !self.w.is_finite() {
            return None;
        }
        let mx = self.x / self.w;
        let my = self.y / self.w;
        let mxx = self.xx / self.w;
        let mxy = self.xy / self.w;
        // same test as |W*XX - X*X| < tol * W^2, without squaring a tiny W
        let div = mxx - mx * mx;
        if div.is_nan() || div.abs() < SINGULAR_TOLERANCE {
            return None;
        }
        Some(((mxy - mx * my) / div, (mxx * my - mx * mxy) / div))
    }

    /// Returns `(slope, intercept)` of the fitted line, or `None` when the
    /// accumulated `x` values do not spread enough to determine one.
    pub fn coefficients(&self) -> Option<(f64, f64)> {
        self.line()
    }

    /// Evaluates the fitted line at `x`.
    ///
    /// Falls back to the identity (slope 1, intercept 0) when the fit is
    /// near-singular, which happens on an empty, zero-weight or
    /// single-sample fit.
    pub fn interpolate(&self, x: f64) -> f64 {
        let Some((a, b)) = self.line() else {
            return x;
        };
        let out = a * x + b;
        trace!(a, b, x, out, "linear fit");
        out
    }

    /// Sum of squares of all six sums. Logs a warning past
    /// [`OVERFLOW_MAGNITUDE`]; the value itself is advisory.
    pub fn size(&self) -> f64 {
        let s = self.magnitude();
        if s > OVERFLOW_MAGNITUDE {
            warn!(
                w = self.w,
                x = self.x,
                y = self.y,
                xx = self.xx,
                xy = self.xy,
                yy = self.yy,
                "linear fit is overflowing"
            );
        }
        s
    }

    /// Same check as [`size`](LinearFit::size) without logging.
    #[inline]
    pub fn is_overflowing(&self) -> bool {
        self.magnitude() > OVERFLOW_MAGNITUDE
    }

    #[inline]
    fn magnitude(&self) -> f64 {
        self.w * self.w
            + self.x * self.x
            + self.y * self.y
            + self.xx * self.xx
            + self.xy * self.xy
            + self.yy * self.yy
    }
}
