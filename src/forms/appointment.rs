//! Request body for creating and updating appointments.

use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::appointment::{NewAppointment, UpdateAppointment};
use crate::domain::types::{AppointmentStatus, OwnerId, PetId, VetId};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Appointment fields supplied by the client on create and update.
pub struct AppointmentRequest {
    pub owner_id: i32,
    pub vet_id: i32,
    pub pet_id: i32,
    /// Visit time, e.g. `2025-03-14T10:30:00`.
    pub scheduled_at: NaiveDateTime,
    /// Opaque status label; `PENDING` when omitted.
    #[validate(length(min = 1))]
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Validated appointment values ready to become a domain insert or update.
#[derive(Debug)]
pub struct AppointmentPayload {
    pub owner_id: OwnerId,
    pub vet_id: VetId,
    pub pet_id: PetId,
    pub scheduled_at: NaiveDateTime,
    pub status: AppointmentStatus,
    pub description: Option<String>,
}

impl TryFrom<AppointmentRequest> for AppointmentPayload {
    type Error = FormError;

    fn try_from(request: AppointmentRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let status = match request.status {
            Some(status) => {
                AppointmentStatus::new(status).map_err(|_| FormError::InvalidStatus)?
            }
            None => AppointmentStatus::pending(),
        };

        Ok(Self {
            owner_id: OwnerId::new(request.owner_id).map_err(|_| FormError::InvalidOwnerId)?,
            vet_id: VetId::new(request.vet_id).map_err(|_| FormError::InvalidVetId)?,
            pet_id: PetId::new(request.pet_id).map_err(|_| FormError::InvalidPetId)?,
            scheduled_at: request.scheduled_at,
            status,
            description: request.description,
        })
    }
}

impl AppointmentPayload {
    pub fn into_new(self, now: NaiveDateTime) -> NewAppointment {
        NewAppointment::new(
            self.owner_id,
            self.vet_id,
            self.pet_id,
            self.scheduled_at,
            self.status,
            self.description,
            now,
        )
    }

    pub fn into_update(self, now: NaiveDateTime) -> UpdateAppointment {
        UpdateAppointment::new(
            self.owner_id,
            self.vet_id,
            self.pet_id,
            self.scheduled_at,
            self.status,
            self.description,
            now,
        )
    }
}
