//! Repository implementation for vets and their specialties.

use diesel::{Connection, prelude::*, sqlite::SqliteConnection};

use crate::{
    domain::{
        types::VetId,
        vet::{NewVet, UpdateVet, Vet},
    },
    models::vet::{
        NewVet as DbNewVet, UpdateVet as DbUpdateVet, Vet as DbVet, VetSpecialty,
        specialty_rows,
    },
    repository::{
        DieselRepository, VetReader, VetWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Loads the specialties of `db_vet` and assembles the aggregate.
fn load_vet(conn: &mut SqliteConnection, db_vet: DbVet) -> RepositoryResult<Vet> {
    let specialties = VetSpecialty::belonging_to(&db_vet)
        .select(VetSpecialty::as_select())
        .load::<VetSpecialty>(conn)?;

    db_vet
        .into_domain(specialties)
        .map_err(RepositoryError::from)
}

impl VetReader for DieselRepository {
    fn get_vet_by_id(&self, id: VetId) -> RepositoryResult<Option<Vet>> {
        use crate::schema::vets;

        let mut conn = self.conn()?;
        let db_vet = vets::table
            .find(id.get())
            .select(DbVet::as_select())
            .first::<DbVet>(&mut *conn)
            .optional()?;

        db_vet.map(|db_vet| load_vet(&mut conn, db_vet)).transpose()
    }

    fn list_vets(&self) -> RepositoryResult<Vec<Vet>> {
        use crate::schema::vets;

        let mut conn = self.conn()?;
        let db_vets = vets::table
            .order(vets::id.asc())
            .select(DbVet::as_select())
            .load::<DbVet>(&mut *conn)?;

        let specialties = VetSpecialty::belonging_to(&db_vets)
            .select(VetSpecialty::as_select())
            .load::<VetSpecialty>(&mut *conn)?
            .grouped_by(&db_vets);

        db_vets
            .into_iter()
            .zip(specialties)
            .map(|(db_vet, rows)| db_vet.into_domain(rows).map_err(RepositoryError::from))
            .collect()
    }
}

impl VetWriter for DieselRepository {
    fn create_vet(&self, vet: &NewVet) -> RepositoryResult<Vet> {
        use crate::schema::{vet_specialties, vets};

        let mut conn = self.conn()?;
        let insertable: DbNewVet = vet.into();

        conn.transaction::<Vet, RepositoryError, _>(|conn| {
            let db_vet = diesel::insert_into(vets::table)
                .values(&insertable)
                .returning(DbVet::as_returning())
                .get_result::<DbVet>(conn)?;

            if !vet.specialties.is_empty() {
                let vet_id = VetId::try_from(db_vet.id).map_err(RepositoryError::from)?;
                diesel::insert_into(vet_specialties::table)
                    .values(specialty_rows(vet_id, &vet.specialties))
                    .execute(conn)?;
            }

            load_vet(conn, db_vet)
        })
    }

    fn update_vet(&self, id: VetId, updates: &UpdateVet) -> RepositoryResult<Vet> {
        use crate::schema::{vet_specialties, vets};

        let mut conn = self.conn()?;
        let changes: DbUpdateVet = updates.into();

        conn.transaction::<Vet, RepositoryError, _>(|conn| {
            let db_vet = diesel::update(vets::table.find(id.get()))
                .set(&changes)
                .returning(DbVet::as_returning())
                .get_result::<DbVet>(conn)?;

            diesel::delete(vet_specialties::table.filter(vet_specialties::vet_id.eq(id.get())))
                .execute(conn)?;
            if !updates.specialties.is_empty() {
                diesel::insert_into(vet_specialties::table)
                    .values(specialty_rows(id, &updates.specialties))
                    .execute(conn)?;
            }

            load_vet(conn, db_vet)
        })
    }

    fn delete_vet(&self, id: VetId) -> RepositoryResult<()> {
        use crate::schema::vets;

        let mut conn = self.conn()?;
        // Specialty rows go with the vet through ON DELETE CASCADE.
        let deleted = diesel::delete(vets::table.find(id.get())).execute(&mut *conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
