//! Repository implementation for appointments.

use diesel::prelude::*;

use crate::{
    domain::{
        appointment::{Appointment, NewAppointment, UpdateAppointment},
        types::AppointmentId,
    },
    models::appointment::{
        Appointment as DbAppointment, NewAppointment as DbNewAppointment,
        UpdateAppointment as DbUpdateAppointment,
    },
    repository::{
        AppointmentReader, AppointmentWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl AppointmentReader for DieselRepository {
    fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>> {
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        let appointment = appointments::table
            .find(id.get())
            .select(DbAppointment::as_select())
            .first::<DbAppointment>(&mut *conn)
            .optional()?;

        appointment
            .map(Appointment::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_appointments(&self) -> RepositoryResult<Vec<Appointment>> {
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        appointments::table
            .order(appointments::id.asc())
            .select(DbAppointment::as_select())
            .load::<DbAppointment>(&mut *conn)?
            .into_iter()
            .map(|row| Appointment::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl AppointmentWriter for DieselRepository {
    fn create_appointment(&self, appointment: &NewAppointment) -> RepositoryResult<Appointment> {
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        let insertable: DbNewAppointment = appointment.into();

        let created = diesel::insert_into(appointments::table)
            .values(&insertable)
            .returning(DbAppointment::as_returning())
            .get_result::<DbAppointment>(&mut *conn)?;

        Appointment::try_from(created).map_err(RepositoryError::from)
    }

    fn update_appointment(
        &self,
        id: AppointmentId,
        updates: &UpdateAppointment,
    ) -> RepositoryResult<Appointment> {
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        let changes: DbUpdateAppointment = updates.into();

        let updated = diesel::update(appointments::table.find(id.get()))
            .set(&changes)
            .returning(DbAppointment::as_returning())
            .get_result::<DbAppointment>(&mut *conn)?;

        Appointment::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_appointment(&self, id: AppointmentId) -> RepositoryResult<()> {
        use crate::schema::appointments;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(appointments::table.find(id.get())).execute(&mut *conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
