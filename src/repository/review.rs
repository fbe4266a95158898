//! Repository implementation for owner reviews.

use diesel::prelude::*;

use crate::{
    domain::{
        review::{NewReview, Review, UpdateReview},
        types::{OwnerId, ReviewId},
    },
    models::review::{
        NewReview as DbNewReview, Review as DbReview, UpdateReview as DbUpdateReview,
    },
    repository::{
        DieselRepository, ReviewReader, ReviewWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ReviewReader for DieselRepository {
    fn get_review_by_id(&self, id: ReviewId) -> RepositoryResult<Option<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let review = reviews::table
            .find(id.get())
            .select(DbReview::as_select())
            .first::<DbReview>(&mut *conn)
            .optional()?;

        review
            .map(Review::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_reviews_by_owner(&self, owner_id: OwnerId) -> RepositoryResult<Vec<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        reviews::table
            .filter(reviews::owner_id.eq(owner_id.get()))
            .order(reviews::id.asc())
            .select(DbReview::as_select())
            .load::<DbReview>(&mut *conn)?
            .into_iter()
            .map(|row| Review::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, review: &NewReview) -> RepositoryResult<Review> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let insertable: DbNewReview = review.into();

        let created = diesel::insert_into(reviews::table)
            .values(&insertable)
            .returning(DbReview::as_returning())
            .get_result::<DbReview>(&mut *conn)?;

        Review::try_from(created).map_err(RepositoryError::from)
    }

    fn update_review(&self, id: ReviewId, updates: &UpdateReview) -> RepositoryResult<Review> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let changes: DbUpdateReview = updates.into();

        let updated = diesel::update(reviews::table.find(id.get()))
            .set(&changes)
            .returning(DbReview::as_returning())
            .get_result::<DbReview>(&mut *conn)?;

        Review::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_review(&self, id: ReviewId) -> RepositoryResult<()> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(reviews::table.find(id.get())).execute(&mut *conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
