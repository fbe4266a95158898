//! HTTP handlers for the clinic API.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};

use crate::dto::error::ErrorBody;
use crate::services::ServiceError;

pub mod appointment;
pub mod review;
pub mod vet;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            ServiceError::Internal(detail) => {
                log::error!("Request failed: {detail}");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        error_body(status, message)
    }
}

fn error_body(status: StatusCode, error: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        error,
        status: status.as_u16(),
    })
}

/// Malformed JSON bodies answer 400 with the usual error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let response = error_body(StatusCode::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    })
}

/// Missing or malformed query parameters answer 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        let response = error_body(StatusCode::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    })
}

/// Non-numeric path ids answer 400.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        let response = error_body(StatusCode::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    })
}

/// Registers every clinic handler and the extractor configs on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(appointment::create_appointment)
        .service(appointment::list_appointments)
        .service(appointment::get_appointment)
        .service(appointment::update_appointment)
        .service(appointment::delete_appointment)
        .service(vet::register_vet)
        .service(vet::list_vets)
        .service(vet::get_vet)
        .service(vet::update_vet)
        .service(vet::delete_vet)
        .service(review::save_review)
        .service(review::list_reviews)
        .service(review::update_review)
        .service(review::delete_review);
}
