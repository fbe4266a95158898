//! Diesel models representing appointments.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::appointment::{
    Appointment as DomainAppointment, NewAppointment as DomainNewAppointment,
    UpdateAppointment as DomainUpdateAppointment,
};
use crate::domain::types::{
    AppointmentId, AppointmentStatus, OwnerId, PetId, TypeConstraintError, VetId,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::appointments)]
/// Diesel model for [`crate::domain::appointment::Appointment`].
pub struct Appointment {
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::appointments)]
/// Insertable form of [`Appointment`].
pub struct NewAppointment<'a> {
    pub owner_id: i32,
    pub vet_id: i32,
    pub pet_id: i32,
    pub scheduled_at: NaiveDateTime,
    pub status: &'a str,
    pub description: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::appointments)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating an [`Appointment`] record.
pub struct UpdateAppointment<'a> {
    pub owner_id: i32,
    pub vet_id: i32,
    pub pet_id: i32,
    pub scheduled_at: NaiveDateTime,
    pub status: &'a str,
    pub description: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Appointment> for DomainAppointment {
    type Error = TypeConstraintError;

    fn try_from(appointment: Appointment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AppointmentId::try_from(appointment.id)?,
            owner_id: OwnerId::try_from(appointment.owner_id)?,
            vet_id: VetId::try_from(appointment.vet_id)?,
            pet_id: PetId::try_from(appointment.pet_id)?,
            scheduled_at: appointment.scheduled_at,
            status: AppointmentStatus::new(appointment.status)?,
            description: appointment.description,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewAppointment> for NewAppointment<'a> {
    /// Both timestamps start at the domain value's `created_at`.
    fn from(appointment: &'a DomainNewAppointment) -> Self {
        Self {
            owner_id: appointment.owner_id.get(),
            vet_id: appointment.vet_id.get(),
            pet_id: appointment.pet_id.get(),
            scheduled_at: appointment.scheduled_at,
            status: appointment.status.as_str(),
            description: appointment.description.as_deref(),
            created_at: appointment.created_at,
            updated_at: appointment.created_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateAppointment> for UpdateAppointment<'a> {
    fn from(appointment: &'a DomainUpdateAppointment) -> Self {
        Self {
            owner_id: appointment.owner_id.get(),
            vet_id: appointment.vet_id.get(),
            pet_id: appointment.pet_id.get(),
            scheduled_at: appointment.scheduled_at,
            status: appointment.status.as_str(),
            description: appointment.description.as_deref(),
            updated_at: appointment.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn new_appointment_row_copies_creation_time() {
        let domain = DomainNewAppointment::new(
            OwnerId::new(1).expect("valid owner id"),
            VetId::new(2).expect("valid vet id"),
            PetId::new(3).expect("valid pet id"),
            at(10),
            AppointmentStatus::pending(),
            Some("  limping  ".to_string()),
            at(8),
        );

        let row: NewAppointment = (&domain).into();
        assert_eq!(row.owner_id, 1);
        assert_eq!(row.vet_id, 2);
        assert_eq!(row.pet_id, 3);
        assert_eq!(row.status, "PENDING");
        assert_eq!(row.description, Some("limping"));
        assert_eq!(row.created_at, at(8));
        assert_eq!(row.updated_at, at(8));
    }

    #[test]
    fn appointment_into_domain() {
        let db = Appointment {
            id: 9,
            owner_id: 1,
            vet_id: 2,
            pet_id: 3,
            scheduled_at: at(10),
            status: "CONFIRMED".into(),
            description: None,
            created_at: at(8),
            updated_at: at(9),
        };

        let domain = DomainAppointment::try_from(db).expect("valid appointment");
        assert_eq!(domain.id.get(), 9);
        assert_eq!(domain.status.as_str(), "CONFIRMED");
        assert_eq!(domain.updated_at, at(9));
    }

    #[test]
    fn appointment_with_blank_status_is_rejected() {
        let db = Appointment {
            id: 9,
            owner_id: 1,
            vet_id: 2,
            pet_id: 3,
            scheduled_at: at(10),
            status: " ".into(),
            description: None,
            created_at: at(8),
            updated_at: at(8),
        };

        assert_eq!(
            DomainAppointment::try_from(db),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
