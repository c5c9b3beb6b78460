use crate::errors::AppError;
use crate::prompts::models::PromptEntry;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub fn validate_rating(rating: u8) -> Result<u8, AppError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(AppError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Folds one more rating into a running average. The stored average is
/// already rounded, so over many ratings the result can drift slightly from
/// the exact mean.
pub fn running_average(average: f64, count: u32, rating: u8) -> f64 {
    let total = average * f64::from(count) + f64::from(rating);
    round_to_tenth(total / f64::from(count + 1))
}

/// `rating` must already have passed [`validate_rating`].
pub fn apply_rating(entry: &mut PromptEntry, rating: u8) {
    entry.rating = running_average(entry.rating, entry.rating_count, rating);
    entry.rating_count += 1;
}

pub fn record_copy(entry: &mut PromptEntry) {
    entry.usage_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::seed::demo_prompts;

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        for r in MIN_RATING..=MAX_RATING {
            assert_eq!(validate_rating(r).unwrap(), r);
        }
    }

    #[test]
    fn test_first_rating_is_the_average() {
        assert_eq!(running_average(0.0, 0, 4), 4.0);
    }

    #[test]
    fn test_running_average_rounds_to_one_decimal() {
        // (4.8 * 156 + 1) / 157 = 4.7745...
        assert_eq!(running_average(4.8, 156, 1), 4.8);
        // (4.0 * 2 + 5) / 3 = 4.333...
        assert_eq!(running_average(4.0, 2, 5), 4.3);
        // (3.0 * 1 + 4) / 2 = 3.5
        assert_eq!(running_average(3.0, 1, 4), 3.5);
    }

    #[test]
    fn test_apply_rating_and_copy() {
        let mut entry = demo_prompts().remove(0);
        let count = entry.rating_count;
        let usage = entry.usage_count;

        apply_rating(&mut entry, 5);
        record_copy(&mut entry);

        assert_eq!(entry.rating_count, count + 1);
        assert_eq!(entry.usage_count, usage + 1);
        assert!((1.0..=5.0).contains(&entry.rating));
    }
}
