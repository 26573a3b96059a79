pub mod fits;
pub(crate) mod history;
