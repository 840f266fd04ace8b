pub mod round;
pub mod runtime;
pub mod store;
