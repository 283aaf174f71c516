//! Digest orchestration: AI-first, local-always.
//!
//! Builds the pros/cons digest for one product. The only hard failure is
//! an unknown product; every AI-path failure is logged with its
//! classification and recovered by the local summariser, so callers
//! always get a digest.

use crate::llm::{LlmClient, LlmError};
use crate::local;
use crate::prompt::build_prompt;
use crate::review::{Product, Review, ReviewStore};
use crate::summary::{Source, Summary};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many of the newest reviews feed one digest.
pub const REVIEW_LIMIT: usize = 20;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("product not found: {0}")]
    ProductNotFound(u64),
}

/// The digest returned to callers. Rating aggregates come straight from
/// the product record, not from the sampled reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDigest {
    pub source: Source,
    pub average_rating: f64,
    pub review_count: u64,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl ReviewDigest {
    fn assemble(product: &Product, source: Source, summary: Summary) -> Self {
        Self {
            source,
            average_rating: product.average_rating,
            review_count: product.review_count,
            pros: summary.pros,
            cons: summary.cons,
        }
    }
}

/// Produce the review digest for a product.
///
/// Fetches the newest [`REVIEW_LIMIT`] reviews, tries the model over the
/// ones that carry a comment, and falls back to the local summariser over
/// the whole sample when there is nothing to prompt with or the model
/// path fails in any way. Exactly one model attempt per call, no retries.
pub async fn digest<S: ReviewStore>(
    store: &S,
    client: &LlmClient,
    product_id: u64,
) -> Result<ReviewDigest, DigestError> {
    let product = store
        .product(product_id)
        .ok_or(DigestError::ProductNotFound(product_id))?;

    let latest = store.latest_reviews(product_id, REVIEW_LIMIT);
    let usable: Vec<Review> = latest
        .iter()
        .filter(|r| r.has_comment())
        .cloned()
        .collect();

    if usable.is_empty() {
        return Ok(ReviewDigest::assemble(
            &product,
            Source::Local,
            local::summarize(&latest),
        ));
    }

    let prompt = build_prompt(&product.name, &usable);
    match client.summarize(&prompt).await {
        Ok(summary) => Ok(ReviewDigest::assemble(
            &product,
            Source::Ai,
            summary.cleaned(),
        )),
        Err(err) => {
            log_fallback(product_id, &err);
            Ok(ReviewDigest::assemble(
                &product,
                Source::Local,
                local::summarize(&latest),
            ))
        }
    }
}

/// One warn line per fallback, classification spelled out and the
/// provider status carried when there is one.
fn log_fallback(product_id: u64, err: &LlmError) {
    match err {
        LlmError::ConfigMissing => log::warn!(
            "AI summary for product {product_id} skipped (no API key): using local summary"
        ),
        LlmError::Provider(status) => log::warn!(
            "AI summary for product {product_id} failed (provider_status={status}): using local summary"
        ),
        LlmError::BadGateway => log::warn!(
            "AI summary for product {product_id} failed (empty content): using local summary"
        ),
        LlmError::Malformed(reason) => log::warn!(
            "AI summary for product {product_id} failed ({reason}): using local summary"
        ),
    }
}
