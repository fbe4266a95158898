//! Diesel models representing reviews.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{
    NewReview as DomainNewReview, Review as DomainReview, UpdateReview as DomainUpdateReview,
};
use crate::domain::types::{OwnerId, ReviewId, Score, TypeConstraintError, VetId};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reviews)]
/// Diesel model for [`crate::domain::review::Review`].
pub struct Review {
    pub id: i32,
    pub score: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub owner_id: i32,
    pub vet_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
/// Insertable form of [`Review`].
pub struct NewReview<'a> {
    pub score: i32,
    pub content: &'a str,
    pub created_at: NaiveDateTime,
    pub owner_id: i32,
    pub vet_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::reviews)]
/// Only score and content are ever rewritten.
pub struct UpdateReview<'a> {
    pub score: i32,
    pub content: &'a str,
}

impl TryFrom<Review> for DomainReview {
    type Error = TypeConstraintError;

    fn try_from(review: Review) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ReviewId::try_from(review.id)?,
            score: Score::try_from(review.score)?,
            content: review.content,
            created_at: review.created_at,
            owner_id: OwnerId::try_from(review.owner_id)?,
            vet_id: review.vet_id.map(VetId::try_from).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewReview> for NewReview<'a> {
    fn from(review: &'a DomainNewReview) -> Self {
        Self {
            score: review.score.get(),
            content: review.content.as_str(),
            created_at: review.created_at,
            owner_id: review.owner_id.get(),
            vet_id: review.vet_id.map(VetId::get),
        }
    }
}

impl<'a> From<&'a DomainUpdateReview> for UpdateReview<'a> {
    fn from(review: &'a DomainUpdateReview) -> Self {
        Self {
            score: review.score.get(),
            content: review.content.as_str(),
        }
    }
}
