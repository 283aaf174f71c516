//! Product and review records, plus the store collaborator.
//!
//! The digest pipeline only reads: products and their reviews live in an
//! external store. `ReviewStore` is the seam it consumes them through, and
//! `StaticStore` is a JSON-file-backed implementation for the CLI and tests.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// A customer review. Both fields are optional in the source data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    /// Star rating, 1-5 when present.
    pub rating: Option<u8>,
    /// Free-text comment.
    pub comment: Option<String>,
}

impl Review {
    /// A review is eligible for summarisation only if it carries a
    /// non-blank comment.
    pub fn has_comment(&self) -> bool {
        self.comment
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty())
    }
}

/// Aggregate product record. `average_rating` and `review_count` are
/// authoritative store-side aggregates, never recomputed from a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub average_rating: f64,
    pub review_count: u64,
}

/// Read access to the external product/review store.
pub trait ReviewStore {
    /// Look up a product by id.
    fn product(&self, product_id: u64) -> Option<Product>;

    /// The most recent `limit` reviews for a product, newest first.
    /// Unknown products yield an empty list.
    fn latest_reviews(&self, product_id: u64, limit: usize) -> Vec<Review>;
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read review data: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse review data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One product together with its reviews, newest first, as found in a
/// fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// In-memory store loaded from a JSON fixture: a list of `ProductRecord`s.
#[derive(Debug, Clone, Default)]
pub struct StaticStore {
    records: Vec<ProductRecord>,
}

impl StaticStore {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    /// Load a fixture file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<ProductRecord> = serde_json::from_str(&content)?;
        Ok(Self { records })
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.records.iter().map(|r| &r.product)
    }
}

impl ReviewStore for StaticStore {
    fn product(&self, product_id: u64) -> Option<Product> {
        self.records
            .iter()
            .find(|r| r.product.id == product_id)
            .map(|r| r.product.clone())
    }

    fn latest_reviews(&self, product_id: u64, limit: usize) -> Vec<Review> {
        self.records
            .iter()
            .find(|r| r.product.id == product_id)
            .map(|r| r.reviews.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_requires_nonblank_comment() {
        let blank = Review {
            rating: Some(4),
            comment: Some("   \n".to_string()),
        };
        let missing = Review {
            rating: Some(4),
            comment: None,
        };
        let ok = Review {
            rating: None,
            comment: Some("solid".to_string()),
        };
        assert!(!blank.has_comment());
        assert!(!missing.has_comment());
        assert!(ok.has_comment());
    }

    #[test]
    fn static_store_caps_review_fetch() {
        let reviews = (0..30)
            .map(|i| Review {
                rating: Some(5),
                comment: Some(format!("review {i}")),
            })
            .collect();
        let store = StaticStore::new(vec![ProductRecord {
            product: Product {
                id: 7,
                name: "Widget".to_string(),
                average_rating: 4.5,
                review_count: 30,
            },
            reviews,
        }]);

        let latest = store.latest_reviews(7, 20);
        assert_eq!(latest.len(), 20);
        assert_eq!(latest[0].comment.as_deref(), Some("review 0"));
        assert!(store.latest_reviews(8, 20).is_empty());
        assert!(store.product(8).is_none());
    }

    #[test]
    fn fixture_json_round_trips() {
        let json = r#"[
            {
                "id": 1,
                "name": "Widget",
                "average_rating": 4.2,
                "review_count": 137,
                "reviews": [
                    { "rating": 5, "comment": "Excellent battery life and great price!" },
                    { "rating": 3 }
                ]
            }
        ]"#;
        let records: Vec<ProductRecord> = serde_json::from_str(json).unwrap();
        let store = StaticStore::new(records);
        let product = store.product(1).unwrap();
        assert_eq!(product.review_count, 137);
        let latest = store.latest_reviews(1, 20);
        assert_eq!(latest.len(), 2);
        assert!(latest[0].has_comment());
        assert!(!latest[1].has_comment());
    }
}
