pub mod config;
pub mod core;
pub mod interpolators;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
