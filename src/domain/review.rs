use crate::domain::errors::ValidationError;

// Review as embedded in a place detail response.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub text: String,
    pub rating: i64,
    pub author: ReviewAuthor,
}

// Author shape is resolved once when the response is decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewAuthor {
    // Full name built from a user object.
    Person(String),
    // Author sent as a bare string.
    Name(String),
    Anonymous,
}

impl ReviewAuthor {
    pub fn display_name(&self) -> &str {
        match self {
            ReviewAuthor::Person(name) | ReviewAuthor::Name(name) => name,
            ReviewAuthor::Anonymous => "Anonymous",
        }
    }
}

/// Star rating accepted for submission, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Parse the raw value of the rating control. An empty value means
    /// nothing was selected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::RatingMissing);
        }
        let value = raw
            .parse::<i64>()
            .map_err(|_| ValidationError::RatingOutOfRange)?;
        Self::try_from(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            // Range checked above.
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::RatingOutOfRange)
        }
    }
}

// Review ready to be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub text: String,
    pub rating: Rating,
    pub place_id: String,
}

impl NewReview {
    /// Validate raw form input; the comment is sent trimmed.
    pub fn from_form(
        place_id: impl Into<String>,
        raw_rating: &str,
        raw_text: &str,
    ) -> Result<Self, ValidationError> {
        let rating = Rating::parse(raw_rating)?;
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyComment);
        }
        Ok(Self {
            text: text.to_string(),
            rating,
            place_id: place_id.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_rating_is_blank_then_returns_rating_missing() {
        assert_eq!(Rating::parse(""), Err(ValidationError::RatingMissing));
        assert_eq!(Rating::parse("  "), Err(ValidationError::RatingMissing));
    }

    #[test]
    fn when_rating_is_outside_one_to_five_then_returns_out_of_range() {
        assert_eq!(Rating::parse("0"), Err(ValidationError::RatingOutOfRange));
        assert_eq!(Rating::parse("6"), Err(ValidationError::RatingOutOfRange));
        assert_eq!(Rating::parse("4.5"), Err(ValidationError::RatingOutOfRange));
    }

    #[test]
    fn when_rating_is_at_bounds_then_it_is_accepted() {
        assert_eq!(Rating::parse("1").map(Rating::value), Ok(1));
        assert_eq!(Rating::parse("5").map(Rating::value), Ok(5));
    }

    #[test]
    fn when_comment_is_only_whitespace_then_returns_empty_comment() {
        let result = NewReview::from_form("p1", "4", " \n\t ");
        assert_eq!(result, Err(ValidationError::EmptyComment));
    }

    #[test]
    fn when_rating_is_missing_then_it_is_reported_before_the_comment() {
        let result = NewReview::from_form("p1", "", "");
        assert_eq!(result, Err(ValidationError::RatingMissing));
    }

    #[test]
    fn when_form_is_valid_then_comment_is_trimmed() {
        let review = NewReview::from_form("p1", "4", "  Great stay ").expect("expected review");
        assert_eq!(review.text, "Great stay");
        assert_eq!(review.rating.value(), 4);
        assert_eq!(review.place_id, "p1");
    }

    #[test]
    fn anonymous_author_has_fallback_name() {
        assert_eq!(ReviewAuthor::Anonymous.display_name(), "Anonymous");
        assert_eq!(ReviewAuthor::Name("ada".to_string()).display_name(), "ada");
    }
}
