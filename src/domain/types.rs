//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, review
//! scores within range, non-empty names) so that once a value reaches the
//! domain layer it can be treated as trusted.
//!
//! The identifier newtypes double as reference-by-id handles: an entity that
//! points at an owner, vet or pet stores only the typed key, never the loaded
//! record.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest score a review may carry.
pub const MIN_SCORE: i32 = 1;
/// Highest score a review may carry.
pub const MAX_SCORE: i32 = 5;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Review score fell outside the accepted range.
    #[error("score must be between 1 and 5, got {0}")]
    ScoreOutOfRange(i32),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(OwnerId, "Reference to a pet owner.");
id_newtype!(PetId, "Reference to a pet.");
id_newtype!(VetId, "Unique identifier for a vet.");
id_newtype!(AppointmentId, "Unique identifier for an appointment.");
id_newtype!(ReviewId, "Unique identifier for a review.");

/// Review score constrained to the inclusive `1..=5` range.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i32);

impl Score {
    /// Accepts values between [`MIN_SCORE`] and [`MAX_SCORE`].
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::ScoreOutOfRange(value))
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Score {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for i32 {
    fn from(value: Score) -> Self {
        value.0
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(PersonName, "First or last name enforcing non-empty values.");

non_empty_string_newtype!(
    SpecialtyName,
    "Vet specialty label enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    AppointmentStatus,
    "Opaque appointment status label; no transition rules apply."
);

impl AppointmentStatus {
    /// Status assigned when a request does not name one.
    pub const DEFAULT: &'static str = "PENDING";

    /// Builds the default status.
    pub fn pending() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_rejects_non_positive_values() {
        assert_eq!(OwnerId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(VetId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ReviewId::new(7).map(ReviewId::get), Ok(7));
    }

    #[test]
    fn score_accepts_only_one_to_five() {
        for value in MIN_SCORE..=MAX_SCORE {
            assert_eq!(Score::new(value).map(Score::get), Ok(value));
        }
        assert_eq!(Score::new(0), Err(TypeConstraintError::ScoreOutOfRange(0)));
        assert_eq!(Score::new(6), Err(TypeConstraintError::ScoreOutOfRange(6)));
        assert_eq!(
            Score::new(i32::MIN),
            Err(TypeConstraintError::ScoreOutOfRange(i32::MIN))
        );
    }

    #[test]
    fn names_are_trimmed_and_non_empty() {
        let name = PersonName::new("  James ").expect("valid name");
        assert_eq!(name.as_str(), "James");
        assert_eq!(PersonName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn pending_status_matches_default_label() {
        assert_eq!(AppointmentStatus::pending().as_str(), "PENDING");
    }
}
