//! Appointment representation returned by the API.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::appointment::Appointment;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: i32,
    pub owner_id: i32,
    pub vet_id: i32,
    pub pet_id: i32,
    pub scheduled_at: NaiveDateTime,
    pub status: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.get(),
            owner_id: appointment.owner_id.get(),
            vet_id: appointment.vet_id.get(),
            pet_id: appointment.pet_id.get(),
            scheduled_at: appointment.scheduled_at,
            status: appointment.status.into_inner(),
            description: appointment.description,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}
