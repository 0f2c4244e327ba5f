//! Derivation of a recipe's media score from its review scores.

/// Mean of the given review scores rounded to one decimal, or 0 when the
/// recipe has no reviews. Deterministic, no I/O.
pub fn media_score(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }

    let sum: f64 = scores.iter().map(|s| *s as f64).sum();
    let mean = sum / scores.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_reviews_means_zero() {
        assert_eq!(media_score(&[]), 0.0);
    }

    #[test]
    fn mean_is_rounded_to_one_decimal() {
        assert_eq!(media_score(&[3, 4, 5]), 4.0);
        assert_eq!(media_score(&[1, 2]), 1.5);
        assert_eq!(media_score(&[5, 4, 4]), 4.3);
    }

    #[test]
    fn single_review_is_its_own_mean() {
        assert_eq!(media_score(&[2]), 2.0);
    }
}
