pub mod preview;
pub mod registro;
