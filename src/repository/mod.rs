//! Storage ports and their Diesel implementation.
//!
//! Each aggregate exposes a reader and a writer trait. Services are generic
//! over these traits so they can run against [`DieselRepository`] in
//! production and against `MockRepository` in tests.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard};

use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::sqlite::SqliteConnection;

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        appointment::{Appointment, NewAppointment, UpdateAppointment},
        review::{NewReview, Review, UpdateReview},
        types::{AppointmentId, OwnerId, ReviewId, VetId},
        vet::{NewVet, UpdateVet, Vet},
    },
    repository::errors::{RepositoryError, RepositoryResult},
};

pub mod appointment;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod review;
pub mod vet;

pub trait AppointmentReader {
    fn get_appointment_by_id(&self, id: AppointmentId) -> RepositoryResult<Option<Appointment>>;
    fn list_appointments(&self) -> RepositoryResult<Vec<Appointment>>;
}

pub trait AppointmentWriter {
    fn create_appointment(&self, appointment: &NewAppointment) -> RepositoryResult<Appointment>;
    fn update_appointment(
        &self,
        id: AppointmentId,
        updates: &UpdateAppointment,
    ) -> RepositoryResult<Appointment>;
    fn delete_appointment(&self, id: AppointmentId) -> RepositoryResult<()>;
}

pub trait ReviewReader {
    fn get_review_by_id(&self, id: ReviewId) -> RepositoryResult<Option<Review>>;
    fn list_reviews_by_owner(&self, owner_id: OwnerId) -> RepositoryResult<Vec<Review>>;
}

pub trait ReviewWriter {
    fn create_review(&self, review: &NewReview) -> RepositoryResult<Review>;
    fn update_review(&self, id: ReviewId, updates: &UpdateReview) -> RepositoryResult<Review>;
    fn delete_review(&self, id: ReviewId) -> RepositoryResult<()>;
}

pub trait VetReader {
    fn get_vet_by_id(&self, id: VetId) -> RepositoryResult<Option<Vet>>;
    fn list_vets(&self) -> RepositoryResult<Vec<Vet>>;
}

pub trait VetWriter {
    fn create_vet(&self, vet: &NewVet) -> RepositoryResult<Vet>;
    fn update_vet(&self, id: VetId, updates: &UpdateVet) -> RepositoryResult<Vet>;
    fn delete_vet(&self, id: VetId) -> RepositoryResult<()>;
}

/// Runs a sequence of repository calls as one atomic unit.
pub trait UnitOfWork {
    /// Executes `f` inside a transaction. The transaction commits when `f`
    /// returns `Ok` and rolls back otherwise. Calls made on an already
    /// transactional repository join the outer transaction.
    fn atomic<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<RepositoryError>;
}

/// Diesel-backed implementation of every storage port.
///
/// A plain repository checks out a pooled connection per call. The copy
/// handed to [`UnitOfWork::atomic`] closures is pinned to the single
/// connection that owns the open transaction.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
    pinned: Option<Arc<Mutex<DbConnection>>>,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool, pinned: None }
    }

    /// Connection to run the next statement on.
    fn conn(&self) -> RepositoryResult<RepoConnection<'_>> {
        match &self.pinned {
            Some(pinned) => pinned.lock().map(RepoConnection::Pinned).map_err(|_| {
                RepositoryError::ConnectionError("transaction connection poisoned".to_string())
            }),
            None => Ok(RepoConnection::Pooled(get_connection(&self.pool)?)),
        }
    }
}

enum RepoConnection<'a> {
    Pooled(DbConnection),
    Pinned(MutexGuard<'a, DbConnection>),
}

impl Deref for RepoConnection<'_> {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        match self {
            RepoConnection::Pooled(conn) => &**conn,
            RepoConnection::Pinned(conn) => &***conn,
        }
    }
}

impl DerefMut for RepoConnection<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            RepoConnection::Pooled(conn) => &mut **conn,
            RepoConnection::Pinned(conn) => &mut ***conn,
        }
    }
}

impl UnitOfWork for DieselRepository {
    fn atomic<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        if self.pinned.is_some() {
            return f(self);
        }

        let conn = get_connection(&self.pool).map_err(RepositoryError::from)?;
        let pinned = Arc::new(Mutex::new(conn));
        let scoped = DieselRepository {
            pool: self.pool.clone(),
            pinned: Some(Arc::clone(&pinned)),
        };

        let scope = TransactionScope::begin(&pinned)?;
        let value = f(&scoped)?;
        scope.commit()?;
        Ok(value)
    }
}

/// Open `BEGIN IMMEDIATE` transaction, rolled back on drop unless committed.
struct TransactionScope<'a> {
    conn: &'a Mutex<DbConnection>,
    finished: bool,
}

impl<'a> TransactionScope<'a> {
    fn begin(conn: &'a Mutex<DbConnection>) -> RepositoryResult<Self> {
        let mut guard = lock_ignoring_poison(conn);
        let sqlite: &mut SqliteConnection = &mut guard;
        // IMMEDIATE takes the write lock up front so the read-check-write
        // sequence cannot interleave with another writer.
        AnsiTransactionManager::begin_transaction_sql(sqlite, "BEGIN IMMEDIATE")?;
        Ok(Self {
            conn,
            finished: false,
        })
    }

    fn commit(mut self) -> RepositoryResult<()> {
        self.finished = true;
        let mut guard = lock_ignoring_poison(self.conn);
        let sqlite: &mut SqliteConnection = &mut guard;
        AnsiTransactionManager::commit_transaction(sqlite)?;
        Ok(())
    }
}

impl Drop for TransactionScope<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut guard = lock_ignoring_poison(self.conn);
        let sqlite: &mut SqliteConnection = &mut guard;
        if let Err(err) = AnsiTransactionManager::rollback_transaction(sqlite) {
            log::error!("Failed to roll back transaction: {err}");
        }
    }
}

fn lock_ignoring_poison(conn: &Mutex<DbConnection>) -> MutexGuard<'_, DbConnection> {
    conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
