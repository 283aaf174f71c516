//! Summary shapes shared by the AI and local paths.

use serde::{Deserialize, Serialize};

/// Maximum entries per list.
pub const MAX_ITEMS: usize = 3;

/// Maximum characters per entry.
pub const MAX_ITEM_LEN: usize = 120;

/// Which path produced a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "LOCAL")]
    Local,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Ai => write!(f, "AI"),
            Source::Local => write!(f, "LOCAL"),
        }
    }
}

/// Bounded pros/cons lists: at most [`MAX_ITEMS`] entries per side, each
/// at most [`MAX_ITEM_LEN`] characters, no duplicates within a side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl Summary {
    pub fn new(pros: Vec<String>, cons: Vec<String>) -> Self {
        Self { pros, cons }
    }

    /// Check if the summary has any content.
    pub fn is_empty(&self) -> bool {
        self.pros.is_empty() && self.cons.is_empty()
    }

    /// Re-apply the list bounds to untrusted input, e.g. lists handed back
    /// by the provider.
    pub fn cleaned(self) -> Self {
        Self {
            pros: clean_list(self.pros),
            cons: clean_list(self.cons),
        }
    }
}

/// Trim entries, drop blanks, cap each at [`MAX_ITEM_LEN`] characters,
/// drop exact duplicates keeping the first occurrence, cap the list at
/// [`MAX_ITEMS`].
pub fn clean_list(input: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in input {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        let capped: String = trimmed.chars().take(MAX_ITEM_LEN).collect();
        if out.contains(&capped) {
            continue;
        }
        out.push(capped);
        if out.len() >= MAX_ITEMS {
            break;
        }
    }
    out
}
