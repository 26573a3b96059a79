mod jittered_clock;

pub use jittered_clock::{ClockSample, JitteredClock};
