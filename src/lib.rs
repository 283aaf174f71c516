//! # Reviewlens
//!
//! A bounded pros/cons digest of a product's recent customer reviews.
//!
//! ## Features
//!
//! - **AI-first**: asks a chat-completion provider for the digest, with a
//!   constrained JSON-only prompt and strict timeouts
//! - **Never fails soft-path**: any provider failure is classified, logged,
//!   and recovered by a deterministic keyword-theme summariser
//! - **Bounded output**: at most 3 pros and 3 cons, deduplicated, each
//!   capped at 120 characters, tagged with its provenance ("AI" or "LOCAL")

pub mod config;
pub mod digest;
pub mod llm;
pub mod local;
pub mod prompt;
pub mod review;
pub mod summary;
pub mod themes;

pub use config::Config;
pub use digest::{digest, DigestError, ReviewDigest};
pub use llm::{LlmClient, LlmError};
pub use review::{Product, Review, ReviewStore, StaticStore};
pub use summary::{Source, Summary};
