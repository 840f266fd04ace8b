pub mod course;
pub mod round;
pub mod score;

pub use course::*;
pub use round::*;
pub use score::*;
