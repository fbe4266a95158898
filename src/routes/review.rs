//! Review endpoints. The acting owner is passed as the `ownerId` query
//! parameter; there is no authentication layer in front of it.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::dto::review::ReviewDto;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, review as service};

#[derive(Deserialize)]
pub struct OwnerQuery {
    #[serde(rename = "ownerId")]
    pub owner_id: i32,
}

#[post("/reviews")]
pub async fn save_review(
    repo: web::Data<DieselRepository>,
    dto: web::Json<ReviewDto>,
) -> Result<HttpResponse, ServiceError> {
    let review = service::save_review(repo.get_ref(), dto.into_inner())?;
    Ok(HttpResponse::Ok().json(review))
}

#[get("/reviews")]
pub async fn list_reviews(
    query: web::Query<OwnerQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let reviews = service::list_reviews_by_owner(repo.get_ref(), query.owner_id)?;
    Ok(HttpResponse::Ok().json(reviews))
}

#[put("/reviews/{review_id}")]
pub async fn update_review(
    review_id: web::Path<i32>,
    query: web::Query<OwnerQuery>,
    repo: web::Data<DieselRepository>,
    dto: web::Json<ReviewDto>,
) -> Result<HttpResponse, ServiceError> {
    let review = service::update_review(
        repo.get_ref(),
        review_id.into_inner(),
        dto.into_inner(),
        query.owner_id,
    )?;
    Ok(HttpResponse::Ok().json(review))
}

#[delete("/reviews/{review_id}")]
pub async fn delete_review(
    review_id: web::Path<i32>,
    query: web::Query<OwnerQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    service::delete_review(repo.get_ref(), review_id.into_inner(), query.owner_id)?;
    Ok(HttpResponse::Ok().finish())
}
