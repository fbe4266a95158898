//! Review transfer object, used both as request body and response.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::review::Review;
use crate::domain::types::VetId;

/// `id` and `createdAt` are assigned by the server and ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub score: i32,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub vet_id: Option<i32>,
    #[serde(default)]
    pub owner_id: i32,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: Some(review.id.get()),
            score: review.score.get(),
            content: review.content,
            created_at: Some(review.created_at),
            vet_id: review.vet_id.map(VetId::get),
            owner_id: review.owner_id.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{OwnerId, ReviewId, Score};
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn serializes_camel_case_with_null_vet() {
        let now = Utc::now().naive_utc();
        let dto = ReviewDto::from(Review {
            id: ReviewId::new(1).expect("valid review id"),
            score: Score::new(3).expect("valid score"),
            content: "ok".into(),
            created_at: now,
            owner_id: OwnerId::new(1).expect("valid owner id"),
            vet_id: None,
        });

        let value = serde_json::to_value(&dto).expect("serializable");
        assert_eq!(value["id"], json!(1));
        assert_eq!(value["ownerId"], json!(1));
        assert_eq!(value["vetId"], json!(null));
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn request_body_needs_only_score() {
        let dto: ReviewDto =
            serde_json::from_value(json!({"score": 4, "content": "fine", "ownerId": 2}))
                .expect("valid body");
        assert_eq!(dto.id, None);
        assert_eq!(dto.created_at, None);
        assert_eq!(dto.vet_id, None);
        assert_eq!(dto.owner_id, 2);
    }
}
