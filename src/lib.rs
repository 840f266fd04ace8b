pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod mvu;
pub mod script;
pub mod view;

pub use error::RoundError;
