pub mod games;
pub mod handicap;
pub mod leaderboard;
pub mod scorecard;

pub use games::*;
pub use handicap::*;
pub use leaderboard::*;
pub use scorecard::*;
