mod linear_fit;

pub use linear_fit::{LinearFit, OVERFLOW_MAGNITUDE};
