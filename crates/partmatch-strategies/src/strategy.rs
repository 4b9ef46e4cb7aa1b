use async_trait::async_trait;
use partmatch_types::{MatchResult, PartmatchError};

use crate::context::MatchContext;

/// One stage of the ordered matching pipeline. `match_one` is `async`
/// uniformly — only Hybrid and Llm actually await anything, but a
/// single trait shape keeps the pipeline a plain `Vec<Box<dyn
/// MatchStrategy>>` rather than a split sync/async registry. Every
/// implementation is registered at compile time in
/// [`crate::default_pipeline`]; there is no dynamic strategy
/// registration.
#[async_trait]
pub trait MatchStrategy: Send + Sync {
    /// Name used in logs; matches the `match_type` it produces, e.g.
    /// `"exact_sku"`.
    fn name(&self) -> &'static str;

    async fn match_one(&self, ctx: &MatchContext<'_>) -> Result<Option<MatchResult>, PartmatchError>;
}
