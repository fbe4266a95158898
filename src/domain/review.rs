use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{OwnerId, ReviewId, Score, VetId};

/// Owner feedback, optionally about a specific vet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub score: Score,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub owner_id: OwnerId,
    pub vet_id: Option<VetId>,
}

impl Review {
    /// Whether `owner_id` is the owner that wrote this review.
    pub fn is_owned_by(&self, owner_id: OwnerId) -> bool {
        self.owner_id == owner_id
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewReview {
    pub score: Score,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub owner_id: OwnerId,
    pub vet_id: Option<VetId>,
}

/// Fields an owner may change on an existing review.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateReview {
    pub score: Score,
    pub content: String,
}
