//! Appointment create/read/update/delete workflows.

use chrono::Utc;

use crate::domain::types::AppointmentId;
use crate::dto::appointment::AppointmentResponse;
use crate::forms::appointment::{AppointmentPayload, AppointmentRequest};
use crate::repository::{AppointmentReader, AppointmentWriter, UnitOfWork};
use crate::services::{ServiceError, ServiceResult};

/// Ids that cannot exist in the store are reported as missing.
fn existing_id(id: i32) -> ServiceResult<AppointmentId> {
    AppointmentId::new(id).map_err(|_| ServiceError::NotFound)
}

/// Persists a new appointment and returns it with its generated id.
pub fn create_appointment<R>(
    repo: &R,
    request: AppointmentRequest,
) -> ServiceResult<AppointmentResponse>
where
    R: AppointmentWriter + ?Sized,
{
    let payload = AppointmentPayload::try_from(request)?;

    let appointment = repo
        .create_appointment(&payload.into_new(Utc::now().naive_utc()))
        .map_err(|err| {
            log::error!("Failed to create appointment: {err}");
            err
        })?;

    log::info!("Created appointment {}", appointment.id);
    Ok(appointment.into())
}

/// Returns every appointment ordered by id.
pub fn list_appointments<R>(repo: &R) -> ServiceResult<Vec<AppointmentResponse>>
where
    R: AppointmentReader + ?Sized,
{
    let appointments = repo.list_appointments()?;
    Ok(appointments.into_iter().map(Into::into).collect())
}

pub fn get_appointment<R>(repo: &R, appointment_id: i32) -> ServiceResult<AppointmentResponse>
where
    R: AppointmentReader + ?Sized,
{
    let id = existing_id(appointment_id)?;

    repo.get_appointment_by_id(id)?
        .map(Into::into)
        .ok_or(ServiceError::NotFound)
}

/// Overwrites the mutable fields of an existing appointment.
pub fn update_appointment<R>(
    repo: &R,
    appointment_id: i32,
    request: AppointmentRequest,
) -> ServiceResult<AppointmentResponse>
where
    R: AppointmentReader + AppointmentWriter + UnitOfWork + ?Sized,
{
    let id = existing_id(appointment_id)?;
    let updates = AppointmentPayload::try_from(request)?.into_update(Utc::now().naive_utc());

    repo.atomic(|tx| -> ServiceResult<AppointmentResponse> {
        if tx.get_appointment_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound);
        }
        let updated = tx.update_appointment(id, &updates)?;
        Ok(updated.into())
    })
}

pub fn delete_appointment<R>(repo: &R, appointment_id: i32) -> ServiceResult<()>
where
    R: AppointmentReader + AppointmentWriter + UnitOfWork + ?Sized,
{
    let id = existing_id(appointment_id)?;

    repo.atomic(|tx| -> ServiceResult<()> {
        if tx.get_appointment_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound);
        }
        tx.delete_appointment(id)?;
        log::info!("Deleted appointment {id}");
        Ok(())
    })
}
