use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::vet::VetRequest;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, vet as service};

#[post("/vets")]
pub async fn register_vet(
    repo: web::Data<DieselRepository>,
    form: web::Json<VetRequest>,
) -> Result<HttpResponse, ServiceError> {
    let vet = service::register_vet(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Ok().json(vet))
}

#[get("/vets")]
pub async fn list_vets(repo: web::Data<DieselRepository>) -> Result<HttpResponse, ServiceError> {
    let vets = service::list_vets(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(vets))
}

#[get("/vets/{vet_id}")]
pub async fn get_vet(
    vet_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let vet = service::get_vet(repo.get_ref(), vet_id.into_inner())?;
    Ok(HttpResponse::Ok().json(vet))
}

#[put("/vets/{vet_id}")]
pub async fn update_vet(
    vet_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<VetRequest>,
) -> Result<HttpResponse, ServiceError> {
    let vet = service::update_vet(repo.get_ref(), vet_id.into_inner(), form.into_inner())?;
    Ok(HttpResponse::Ok().json(vet))
}

#[delete("/vets/{vet_id}")]
pub async fn delete_vet(
    vet_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    service::delete_vet(repo.get_ref(), vet_id.into_inner())?;
    Ok(HttpResponse::Ok().finish())
}
