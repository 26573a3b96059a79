mod drive;
pub mod signals;

pub use drive::drive;
pub use signals::{ClockSample, JitteredClock};
