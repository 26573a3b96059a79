use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One reading from a [`JitteredClock`]: the reference time, the measured
/// value, and the noiseless value it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockSample {
    pub x: f64,
    pub y: f64,
    pub truth: f64,
}

/// Endless stream of readings from a clock that runs at `slope` relative to
/// the reference, starts at `offset`, and is read every `period` with uniform
/// jitter in `[-jitter, jitter]`.
#[derive(Debug)]
pub struct JitteredClock {
    rng: StdRng,
    slope: f64,
    offset: f64,
    period: f64,
    jitter: f64,
    produced: u64,
}

impl JitteredClock {
    pub fn new(slope: f64, offset: f64, period: f64, jitter: f64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            slope,
            offset,
            period,
            jitter: jitter.abs(),
            produced: 0,
        }
    }

    #[inline]
    fn noise(&mut self) -> f64 {
        if self.jitter > 0.0 {
            self.rng.random_range(-self.jitter..=self.jitter)
        } else {
            0.0
        }
    }
}

impl Iterator for JitteredClock {
    type Item = ClockSample;

    fn next(&mut self) -> Option<ClockSample> {
        let x = self.produced as f64 * self.period;
        let truth = self.slope * x + self.offset;
        let y = truth + self.noise();
        self.produced += 1;
        Some(ClockSample { x, y, truth })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<_> = JitteredClock::new(1.0, 0.0, 0.01, 0.5, 7).take(50).collect();
        let b: Vec<_> = JitteredClock::new(1.0, 0.0, 0.01, 0.5, 7).take(50).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_stays_in_bounds() {
        for s in JitteredClock::new(2.0, 5.0, 0.1, 0.25, 1).take(1000) {
            assert!((s.y - s.truth).abs() <= 0.25);
            assert!((s.truth - (2.0 * s.x + 5.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_jitter_is_exact() {
        let s: Vec<_> = JitteredClock::new(1.5, -1.0, 1.0, 0.0, 3).take(4).collect();
        assert_eq!(s[3], ClockSample { x: 3.0, y: 3.5, truth: 3.5 });
    }

    #[test]
    fn reference_times_advance_by_period() {
        let xs: Vec<f64> = JitteredClock::new(1.0, 0.0, 0.5, 0.1, 9)
            .take(3)
            .map(|s| s.x)
            .collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
    }
}
