//! Validation helpers for DTOs.

use validator::ValidationError;

/// Number of answer options every question carries.
pub const ANSWER_COUNT: i32 = 4;

/// Validates that a correct-answer index addresses one of the four options.
pub fn validate_correct_answer(index: i32) -> Result<(), ValidationError> {
    if !(1..=ANSWER_COUNT).contains(&index) {
        let mut err = ValidationError::new("correct_answer_range");
        err.message = Some(format!("correct answer must be in 1..={ANSWER_COUNT} (got {index})").into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_four_valid_indexes() {
        for index in 1..=4 {
            assert!(validate_correct_answer(index).is_ok());
        }
    }

    #[test]
    fn rejects_out_of_range_indexes() {
        assert!(validate_correct_answer(0).is_err());
        assert!(validate_correct_answer(5).is_err());
        assert!(validate_correct_answer(-1).is_err());
    }
}
