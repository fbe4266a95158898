use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AppointmentId, AppointmentStatus, OwnerId, PetId, VetId};

/// Scheduled visit of a pet and its owner with a vet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub owner_id: OwnerId,
    pub vet_id: VetId,
    pub pet_id: PetId,
    pub scheduled_at: NaiveDateTime,
    pub status: AppointmentStatus,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewAppointment {
    pub owner_id: OwnerId,
    pub vet_id: VetId,
    pub pet_id: PetId,
    pub scheduled_at: NaiveDateTime,
    pub status: AppointmentStatus,
    pub description: Option<String>,
    /// Stamped into both `created_at` and `updated_at`.
    pub created_at: NaiveDateTime,
}

impl NewAppointment {
    #[must_use]
    pub fn new(
        owner_id: OwnerId,
        vet_id: VetId,
        pet_id: PetId,
        scheduled_at: NaiveDateTime,
        status: AppointmentStatus,
        description: Option<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            owner_id,
            vet_id,
            pet_id,
            scheduled_at,
            status,
            description: normalize_description(description),
            created_at,
        }
    }
}

/// Replacement values for every mutable appointment column.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateAppointment {
    pub owner_id: OwnerId,
    pub vet_id: VetId,
    pub pet_id: PetId,
    pub scheduled_at: NaiveDateTime,
    pub status: AppointmentStatus,
    pub description: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpdateAppointment {
    #[must_use]
    pub fn new(
        owner_id: OwnerId,
        vet_id: VetId,
        pet_id: PetId,
        scheduled_at: NaiveDateTime,
        status: AppointmentStatus,
        description: Option<String>,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            owner_id,
            vet_id,
            pet_id,
            scheduled_at,
            status,
            description: normalize_description(description),
            updated_at,
        }
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
