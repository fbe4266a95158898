//! Vet registration and maintenance.

use crate::domain::types::VetId;
use crate::dto::vet::VetResponse;
use crate::forms::vet::{VetPayload, VetRequest};
use crate::repository::{UnitOfWork, VetReader, VetWriter};
use crate::services::{ServiceError, ServiceResult};

fn existing_id(id: i32) -> ServiceResult<VetId> {
    VetId::new(id).map_err(|_| ServiceError::NotFound)
}

pub fn register_vet<R>(repo: &R, request: VetRequest) -> ServiceResult<VetResponse>
where
    R: VetWriter + ?Sized,
{
    let payload = VetPayload::try_from(request)?;

    let vet = repo.create_vet(&payload.into_new()).map_err(|err| {
        log::error!("Failed to register vet: {err}");
        err
    })?;

    log::info!("Registered vet {}", vet.id);
    Ok(vet.into())
}

pub fn list_vets<R>(repo: &R) -> ServiceResult<Vec<VetResponse>>
where
    R: VetReader + ?Sized,
{
    let vets = repo.list_vets()?;
    Ok(vets.into_iter().map(Into::into).collect())
}

pub fn get_vet<R>(repo: &R, vet_id: i32) -> ServiceResult<VetResponse>
where
    R: VetReader + ?Sized,
{
    let id = existing_id(vet_id)?;

    repo.get_vet_by_id(id)?
        .map(Into::into)
        .ok_or(ServiceError::NotFound)
}

/// Replaces names and specialties of an existing vet.
pub fn update_vet<R>(repo: &R, vet_id: i32, request: VetRequest) -> ServiceResult<VetResponse>
where
    R: VetReader + VetWriter + UnitOfWork + ?Sized,
{
    let id = existing_id(vet_id)?;
    let updates = VetPayload::try_from(request)?.into_update();

    repo.atomic(|tx| -> ServiceResult<VetResponse> {
        if tx.get_vet_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound);
        }
        let vet = tx.update_vet(id, &updates)?;
        Ok(vet.into())
    })
}

/// Removes a vet; fails with `NotFound` and leaves the store untouched when
/// the vet does not exist.
pub fn delete_vet<R>(repo: &R, vet_id: i32) -> ServiceResult<()>
where
    R: VetReader + VetWriter + UnitOfWork + ?Sized,
{
    let id = existing_id(vet_id)?;

    repo.atomic(|tx| -> ServiceResult<()> {
        if tx.get_vet_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound);
        }
        tx.delete_vet(id)?;
        log::info!("Deleted vet {id}");
        Ok(())
    })
}
