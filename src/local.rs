//! Deterministic local fallback summariser.
//!
//! Scans review comments for theme keywords, counts presence per review
//! split by rating polarity, ranks, and maps to human labels. Total over
//! its input: any review list yields a (possibly empty) summary.

use crate::review::Review;
use crate::summary::{Summary, MAX_ITEMS};
use crate::themes::{humanize, THEMES};

/// Build a pros/cons summary from reviews without any model call.
///
/// Positive reviews (rating >= 4) feed the pros counter, negative ones
/// (rating <= 2) the cons counter; a rating of 3 or no rating feeds
/// neither. Matching is substring presence: one increment per keyword per
/// review, however often the keyword repeats in the comment.
pub fn summarize(reviews: &[Review]) -> Summary {
    let mut pros = vec![0u32; THEMES.len()];
    let mut cons = vec![0u32; THEMES.len()];

    for review in reviews {
        let Some(comment) = review.comment.as_deref() else {
            continue;
        };
        if comment.trim().is_empty() {
            continue;
        }
        let text = comment.to_lowercase();

        let positive = review.rating.is_some_and(|r| r >= 4);
        let negative = review.rating.is_some_and(|r| r <= 2);
        if !positive && !negative {
            continue;
        }

        for (i, theme) in THEMES.iter().enumerate() {
            if !text.contains(theme) {
                continue;
            }
            if positive {
                pros[i] += 1;
            } else {
                cons[i] += 1;
            }
        }
    }

    Summary::new(top_labels(&pros), top_labels(&cons))
}

/// Rank counted themes and collapse them to at most [`MAX_ITEMS`] unique
/// labels. The sort is stable and counts were accumulated in catalog
/// order, so ties keep catalog order; label deduplication is what merges
/// e.g. "build" and "quality" into one "Build quality" entry.
fn top_labels(counts: &[u32]) -> Vec<String> {
    let mut ranked: Vec<(usize, u32)> = counts
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut out: Vec<String> = Vec::new();
    for (i, _) in ranked {
        let label = humanize(THEMES[i]);
        if out.iter().any(|seen| seen == label) {
            continue;
        }
        out.push(label.to_string());
        if out.len() >= MAX_ITEMS {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: Option<u8>, comment: &str) -> Review {
        Review {
            rating,
            comment: Some(comment.to_string()),
        }
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        assert!(summarize(&[]).is_empty());
        let uncommented = vec![Review {
            rating: Some(5),
            comment: None,
        }];
        assert!(summarize(&uncommented).is_empty());
    }

    #[test]
    fn neutral_and_unrated_reviews_count_nowhere() {
        let reviews = vec![
            review(Some(3), "battery is fine"),
            review(None, "battery could be better"),
        ];
        assert!(summarize(&reviews).is_empty());
    }

    #[test]
    fn repeated_keyword_counts_once_per_review() {
        // One positive battery review must not outrank two positive price
        // reviews just because it repeats the word.
        let reviews = vec![
            review(Some(5), "great battery and battery life, battery!"),
            review(Some(5), "good price"),
            review(Some(4), "fair price"),
        ];
        let summary = summarize(&reviews);
        assert_eq!(summary.pros, vec!["Price/value", "Battery life"]);
        assert!(summary.cons.is_empty());
    }

    #[test]
    fn ties_keep_catalog_order() {
        let reviews = vec![review(Some(5), "Excellent battery life and great price!")];
        let summary = summarize(&reviews);
        assert_eq!(summary.pros, vec!["Battery life", "Price/value"]);
        assert!(summary.cons.is_empty());
    }

    #[test]
    fn collapsed_labels_surface_once() {
        let reviews = vec![review(Some(2), "bad build, poor quality")];
        let summary = summarize(&reviews);
        assert!(summary.pros.is_empty());
        assert_eq!(summary.cons, vec!["Build quality"]);
    }

    #[test]
    fn one_review_can_feed_several_themes() {
        let reviews = vec![
            review(Some(1), "terrible screen, slow shipping, weak speaker"),
            review(Some(2), "cracked screen on arrival"),
        ];
        let summary = summarize(&reviews);
        assert_eq!(summary.cons[0], "Display");
        assert_eq!(summary.cons.len(), 3);
        assert_eq!(summary.cons[1], "Sound");
        assert_eq!(summary.cons[2], "Shipping/delivery");
    }

    #[test]
    fn substring_matching_is_intentional() {
        // "priceless" contains "price"; accepted imprecision of the
        // substring heuristic.
        let reviews = vec![review(Some(5), "absolutely priceless experience")];
        assert_eq!(summarize(&reviews).pros, vec!["Price/value"]);
    }

    #[test]
    fn deterministic_over_identical_input() {
        let reviews: Vec<Review> = (0..10)
            .map(|i| {
                review(
                    Some(if i % 2 == 0 { 5 } else { 1 }),
                    "battery, camera, sound and software",
                )
            })
            .collect();
        let first = summarize(&reviews);
        for _ in 0..5 {
            assert_eq!(summarize(&reviews), first);
        }
    }
}
