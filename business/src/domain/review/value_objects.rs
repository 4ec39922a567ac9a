#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("review.rating_out_of_range")]
    OutOfRange,
}

/// Star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, RatingError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(RatingError::OutOfRange);
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Wraps a value read back from storage, where a CHECK constraint
    /// already holds it in range.
    pub fn from_repository(value: i16) -> Self {
        Self(value.clamp(i16::from(Self::MIN), i16::from(Self::MAX)) as u8)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommentError {
    #[error("review.comment_empty")]
    Empty,
    #[error("review.comment_too_long")]
    TooLong,
}

/// Review text, stored as VARCHAR(255).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    pub const MAX_CHARS: usize = 255;

    pub fn new(text: impl Into<String>) -> Result<Self, CommentError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(CommentError::Empty);
        }
        if text.chars().count() > Self::MAX_CHARS {
            return Err(CommentError::TooLong);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_repository(text: String) -> Self {
        Self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_ratings_from_one_to_five() {
        for value in 1..=5 {
            assert_eq!(Rating::new(value).unwrap().value() as i64, value);
        }
    }

    #[test]
    fn should_reject_ratings_outside_range() {
        assert_eq!(Rating::new(0), Err(RatingError::OutOfRange));
        assert_eq!(Rating::new(6), Err(RatingError::OutOfRange));
        assert_eq!(Rating::new(-1), Err(RatingError::OutOfRange));
    }

    #[test]
    fn should_trim_comment() {
        assert_eq!(Comment::new("  Great film ").unwrap().as_str(), "Great film");
    }

    #[test]
    fn should_reject_blank_comment() {
        assert_eq!(Comment::new(" \n "), Err(CommentError::Empty));
    }

    #[test]
    fn should_count_characters_not_bytes() {
        assert!(Comment::new("é".repeat(255)).is_ok());
        assert_eq!(Comment::new("a".repeat(256)), Err(CommentError::TooLong));
    }
}
