use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::appointment::AppointmentRequest;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, appointment as service};

#[post("/appointments")]
pub async fn create_appointment(
    repo: web::Data<DieselRepository>,
    form: web::Json<AppointmentRequest>,
) -> Result<HttpResponse, ServiceError> {
    let appointment = service::create_appointment(repo.get_ref(), form.into_inner())?;
    Ok(HttpResponse::Ok().json(appointment))
}

#[get("/appointments")]
pub async fn list_appointments(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let appointments = service::list_appointments(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(appointments))
}

#[get("/appointments/{appointment_id}")]
pub async fn get_appointment(
    appointment_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let appointment = service::get_appointment(repo.get_ref(), appointment_id.into_inner())?;
    Ok(HttpResponse::Ok().json(appointment))
}

#[put("/appointments/{appointment_id}")]
pub async fn update_appointment(
    appointment_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AppointmentRequest>,
) -> Result<HttpResponse, ServiceError> {
    let appointment = service::update_appointment(
        repo.get_ref(),
        appointment_id.into_inner(),
        form.into_inner(),
    )?;
    Ok(HttpResponse::Ok().json(appointment))
}

#[delete("/appointments/{appointment_id}")]
pub async fn delete_appointment(
    appointment_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    service::delete_appointment(repo.get_ref(), appointment_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
