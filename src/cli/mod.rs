pub mod types;
mod prepare;
mod score;

pub use types::{Cli, Command, PrepareArgs, ScoreArgs, ScorerSpec};
pub use prepare::{cmd_info, cmd_prepare};
pub use score::cmd_score;
