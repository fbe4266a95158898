//! Owner review workflows.
//!
//! Reviews are ownership-scoped: only the owner recorded on a review may
//! change or delete it. There is no administrative override.

use chrono::Utc;

use crate::domain::review::{NewReview, UpdateReview};
use crate::domain::types::{OwnerId, ReviewId, Score, VetId};
use crate::dto::review::ReviewDto;
use crate::repository::{ReviewReader, ReviewWriter, UnitOfWork};
use crate::services::{ServiceError, ServiceResult};

/// Validates and stores a new review written by `dto.owner_id`.
///
/// Owner and vet ids are stored as references without checking that the
/// records exist; the store's foreign keys reject dangling ids.
pub fn save_review<R>(repo: &R, dto: ReviewDto) -> ServiceResult<ReviewDto>
where
    R: ReviewWriter + ?Sized,
{
    let score = Score::new(dto.score)?;
    let owner_id = OwnerId::new(dto.owner_id)?;
    let vet_id = dto.vet_id.map(VetId::new).transpose()?;

    let new_review = NewReview {
        score,
        content: dto.content,
        created_at: Utc::now().naive_utc(),
        owner_id,
        vet_id,
    };

    let review = repo.create_review(&new_review).map_err(|err| {
        log::error!("Failed to save review for owner {owner_id}: {err}");
        err
    })?;

    Ok(review.into())
}

/// Lists the reviews written by the owner, oldest first.
pub fn list_reviews_by_owner<R>(repo: &R, owner_id: i32) -> ServiceResult<Vec<ReviewDto>>
where
    R: ReviewReader + ?Sized,
{
    let Ok(owner_id) = OwnerId::new(owner_id) else {
        return Ok(Vec::new());
    };

    let reviews = repo.list_reviews_by_owner(owner_id)?;
    Ok(reviews.into_iter().map(Into::into).collect())
}

/// Changes score and content of a review owned by `owner_id`.
///
/// Checks run in order: existence, ownership, then score range. The whole
/// sequence shares one transaction with the write.
pub fn update_review<R>(
    repo: &R,
    review_id: i32,
    dto: ReviewDto,
    owner_id: i32,
) -> ServiceResult<ReviewDto>
where
    R: ReviewReader + ReviewWriter + UnitOfWork + ?Sized,
{
    let review_id = ReviewId::new(review_id).map_err(|_| ServiceError::NotFound)?;

    repo.atomic(|tx| -> ServiceResult<ReviewDto> {
        let review = tx
            .get_review_by_id(review_id)?
            .ok_or(ServiceError::NotFound)?;

        if !OwnerId::new(owner_id).is_ok_and(|owner| review.is_owned_by(owner)) {
            log::warn!("Owner {owner_id} tried to update review {review_id} it does not own");
            return Err(ServiceError::Forbidden(
                "only the author can update this review".to_string(),
            ));
        }

        let updates = UpdateReview {
            score: Score::new(dto.score)?,
            content: dto.content,
        };

        let updated = tx.update_review(review.id, &updates)?;
        Ok(updated.into())
    })
}

/// Deletes a review owned by `owner_id`.
pub fn delete_review<R>(repo: &R, review_id: i32, owner_id: i32) -> ServiceResult<()>
where
    R: ReviewReader + ReviewWriter + UnitOfWork + ?Sized,
{
    let review_id = ReviewId::new(review_id).map_err(|_| ServiceError::NotFound)?;

    repo.atomic(|tx| -> ServiceResult<()> {
        let review = tx
            .get_review_by_id(review_id)?
            .ok_or(ServiceError::NotFound)?;

        if !OwnerId::new(owner_id).is_ok_and(|owner| review.is_owned_by(owner)) {
            log::warn!("Owner {owner_id} tried to delete review {review_id} it does not own");
            return Err(ServiceError::Forbidden(
                "only the author can delete this review".to_string(),
            ));
        }

        tx.delete_review(review.id)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::review::Review;
    use crate::repository::mock::MockRepository;

    fn created_at() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2025, 1, 2)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid timestamp")
    }

    fn dto(score: i32, content: &str, owner_id: i32) -> ReviewDto {
        ReviewDto {
            id: None,
            score,
            content: content.to_string(),
            created_at: None,
            vet_id: None,
            owner_id,
        }
    }

    fn stored(id: i32, owner_id: i32) -> Review {
        Review {
            id: ReviewId::new(id).expect("valid review id"),
            score: Score::new(2).expect("valid score"),
            content: "meh".into(),
            created_at: created_at(),
            owner_id: OwnerId::new(owner_id).expect("valid owner id"),
            vet_id: Some(VetId::new(4).expect("valid vet id")),
        }
    }

    #[test]
    fn save_rejects_out_of_range_scores_without_writing() {
        for score in [i32::MIN, -1, 0, 6, 100] {
            let mut repo = MockRepository::new();
            repo.expect_create_review().times(0);

            let result = save_review(&repo, dto(score, "x", 1));
            assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
        }
    }

    #[test]
    fn save_builds_references_and_timestamp() {
        let mut repo = MockRepository::new();
        repo.expect_create_review()
            .withf(|review| {
                review.score.get() == 3
                    && review.content == "ok"
                    && review.owner_id.get() == 1
                    && review.vet_id.is_none()
            })
            .times(1)
            .returning(|review| {
                Ok(Review {
                    id: ReviewId::new(10).expect("valid review id"),
                    score: review.score,
                    content: review.content.clone(),
                    created_at: review.created_at,
                    owner_id: review.owner_id,
                    vet_id: review.vet_id,
                })
            });

        let saved = save_review(&repo, dto(3, "ok", 1)).expect("should save");
        assert_eq!(saved.id, Some(10));
        assert!(saved.created_at.is_some());
        assert_eq!(saved.vet_id, None);
        assert_eq!(saved.owner_id, 1);
    }

    #[test]
    fn update_by_other_owner_is_forbidden_even_with_bad_score() {
        for score in [0, 3, 9] {
            let mut repo = MockRepository::new();
            repo.expect_get_review_by_id()
                .times(1)
                .returning(|id| Ok(Some(stored(id.get(), 1))));
            repo.expect_update_review().times(0);

            let result = update_review(&repo, 8, dto(score, "changed", 0), 2);
            assert!(matches!(result, Err(ServiceError::Forbidden(_))));
        }
    }

    #[test]
    fn update_missing_review_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_review_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_update_review().times(0);

        let result = update_review(&repo, 8, dto(3, "changed", 1), 1);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn update_by_owner_with_bad_score_is_invalid() {
        let mut repo = MockRepository::new();
        repo.expect_get_review_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored(id.get(), 1))));
        repo.expect_update_review().times(0);

        let result = update_review(&repo, 8, dto(6, "changed", 1), 1);
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }

    #[test]
    fn update_by_owner_changes_only_score_and_content() {
        let mut repo = MockRepository::new();
        repo.expect_get_review_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored(id.get(), 1))));
        repo.expect_update_review()
            .withf(|id, updates| {
                id.get() == 8 && updates.score.get() == 5 && updates.content == "great now"
            })
            .times(1)
            .returning(|id, updates| {
                let mut review = stored(id.get(), 1);
                review.score = updates.score;
                review.content = updates.content.clone();
                Ok(review)
            });

        let updated = update_review(&repo, 8, dto(5, "great now", 99), 1).expect("should update");
        assert_eq!(updated.score, 5);
        assert_eq!(updated.content, "great now");
        assert_eq!(updated.owner_id, 1);
        assert_eq!(updated.vet_id, Some(4));
        assert_eq!(updated.created_at, Some(created_at()));
    }

    #[test]
    fn delete_by_other_owner_is_forbidden() {
        let mut repo = MockRepository::new();
        repo.expect_get_review_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored(id.get(), 1))));
        repo.expect_delete_review().times(0);

        let result = delete_review(&repo, 8, 3);
        assert!(matches!(result, Err(ServiceError::Forbidden(_))));
    }

    #[test]
    fn delete_by_owner_removes_review() {
        let mut repo = MockRepository::new();
        repo.expect_get_review_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored(id.get(), 1))));
        repo.expect_delete_review()
            .withf(|id| id.get() == 8)
            .times(1)
            .returning(|_| Ok(()));

        delete_review(&repo, 8, 1).expect("should delete");
    }

    #[test]
    fn list_for_unknown_owner_is_empty() {
        let mut repo = MockRepository::new();
        repo.expect_list_reviews_by_owner()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        assert!(list_reviews_by_owner(&repo, 77).expect("should list").is_empty());
    }
}
