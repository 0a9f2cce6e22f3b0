mod error;
mod fetch;
mod info;
mod pipeline;
mod runtime;
mod score;

pub use error::MetricError;
pub use fetch::{default_cache_dir, BEER_URL};
pub use info::MetricInfo;
pub use pipeline::{BeerScorer, BeerScorerBuilder, BeerScorerConfig};
pub use score::{parse_output, BeerScoreResult, SENT_PREFIX};
