pub mod builder;
pub mod calendar;

pub use builder::{Period, build, build_period};
