//! Prompt construction for the review digest.

use crate::review::Review;

/// Maximum characters of one comment embedded into the prompt.
const MAX_COMMENT_LEN: usize = 500;

/// Flatten a comment for prompt embedding: newlines become spaces, the
/// result is trimmed and capped at [`MAX_COMMENT_LEN`] characters.
pub fn sanitize(text: &str) -> String {
    let flat = text.replace(['\r', '\n'], " ");
    flat.trim().chars().take(MAX_COMMENT_LEN).collect()
}

/// Build the user prompt from a product name and its eligible reviews.
///
/// One line per review, `<rating>/5: <comment>`; a missing rating renders
/// as `-`. The trailing instruction block repeats the output contract so
/// the model sees it next to the data.
pub fn build_prompt(product_name: &str, reviews: &[Review]) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!("Product: {}\n", product_name));
    prompt.push_str("Reviews (rating + comment):\n");
    for review in reviews {
        let rating = match review.rating {
            Some(r) => r.to_string(),
            None => "-".to_string(),
        };
        let comment = review.comment.as_deref().unwrap_or_default();
        prompt.push_str(&format!("- {}/5: {}\n", rating, sanitize(comment)));
    }
    prompt.push_str(
        "\nReturn JSON only: {\"pros\":[max 3 short bullet points],\"cons\":[max 3 short bullet points]}.\n",
    );
    prompt.push_str("Do not hallucinate features. Base statements strictly on reviews.\n");
    prompt.push_str("Do not mention AI.\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_flattens_and_trims() {
        assert_eq!(sanitize("  line one\r\nline two\n  "), "line one  line two");
    }

    #[test]
    fn sanitize_caps_at_500_chars() {
        let long = "a".repeat(700);
        assert_eq!(sanitize(&long).chars().count(), 500);
    }

    #[test]
    fn prompt_lists_reviews_with_ratings() {
        let reviews = vec![
            Review {
                rating: Some(5),
                comment: Some("Great battery\nlife".to_string()),
            },
            Review {
                rating: None,
                comment: Some("meh".to_string()),
            },
        ];
        let prompt = build_prompt("Widget", &reviews);
        assert!(prompt.starts_with("Product: Widget\n"));
        assert!(prompt.contains("- 5/5: Great battery life\n"));
        assert!(prompt.contains("- -/5: meh\n"));
        assert!(prompt.contains("Return JSON only"));
        assert!(prompt.ends_with("Do not mention AI.\n"));
    }
}
