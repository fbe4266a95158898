//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::appointment::{Appointment, NewAppointment, UpdateAppointment};
use crate::domain::review::{NewReview, Review, UpdateReview};
use crate::domain::types::{AppointmentId, OwnerId, ReviewId, VetId};
use crate::domain::vet::{NewVet, UpdateVet, Vet};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AppointmentReader, AppointmentWriter, ReviewReader, ReviewWriter, UnitOfWork, VetReader,
    VetWriter,
};

mock! {
    pub Repository {}

    impl AppointmentReader for Repository {
        fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>>;
        fn list_appointments(&self) -> RepositoryResult<Vec<Appointment>>;
    }

    impl AppointmentWriter for Repository {
        fn create_appointment(&self, appointment: &NewAppointment) -> RepositoryResult<Appointment>;
        fn update_appointment(
            &self,
            id: AppointmentId,
            updates: &UpdateAppointment,
        ) -> RepositoryResult<Appointment>;
        fn delete_appointment(&self, id: AppointmentId) -> RepositoryResult<()>;
    }

    impl ReviewReader for Repository {
        fn get_review_by_id(&self, id: ReviewId) -> RepositoryResult<Option<Review>>;
        fn list_reviews_by_owner(&self, owner_id: OwnerId) -> RepositoryResult<Vec<Review>>;
    }

    impl ReviewWriter for Repository {
        fn create_review(&self, review: &NewReview) -> RepositoryResult<Review>;
        fn update_review(&self, id: ReviewId, updates: &UpdateReview) -> RepositoryResult<Review>;
        fn delete_review(&self, id: ReviewId) -> RepositoryResult<()>;
    }

    impl VetReader for Repository {
        fn get_vet_by_id(&self, id: VetId) -> RepositoryResult<Option<Vet>>;
        fn list_vets(&self) -> RepositoryResult<Vec<Vet>>;
    }

    impl VetWriter for Repository {
        fn create_vet(&self, vet: &NewVet) -> RepositoryResult<Vet>;
        fn update_vet(&self, id: VetId, updates: &UpdateVet) -> RepositoryResult<Vet>;
        fn delete_vet(&self, id: VetId) -> RepositoryResult<()>;
    }
}

/// The mock has no transactions; the closure runs directly.
impl UnitOfWork for MockRepository {
    fn atomic<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        f(self)
    }
}
