#![allow(dead_code)]

use diesel::connection::SimpleConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;
use vetclinic::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();
        let pool = establish_connection_pool(&url).expect("build pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Owners 1 and 2, one pet each (pets 1 and 2), and vets 1 and 2.
    pub fn seed(&self) {
        let mut conn = self.pool.get().expect("get connection");
        conn.batch_execute(
            "INSERT INTO owners (id, first_name, last_name, telephone) VALUES
                 (1, 'George', 'Franklin', '6085551023'),
                 (2, 'Betty', 'Davis', '6085551749');
             INSERT INTO pets (id, owner_id, name, birth_date) VALUES
                 (1, 1, 'Leo', '2020-09-07'),
                 (2, 2, 'Basil', '2022-08-06');
             INSERT INTO vets (id, first_name, last_name) VALUES
                 (1, 'James', 'Carter'),
                 (2, 'Helen', 'Leary');
             INSERT INTO vet_specialties (vet_id, specialty) VALUES
                 (2, 'radiology');",
        )
        .expect("seed clinic data");
    }

    pub fn count(&self, table: &str) -> i64 {
        use diesel::prelude::*;
        use diesel::sql_types::BigInt;

        #[derive(QueryableByName)]
        struct Count {
            #[diesel(sql_type = BigInt)]
            n: i64,
        }

        let mut conn = self.pool.get().expect("get connection");
        diesel::sql_query(format!("SELECT COUNT(*) AS n FROM {table}"))
            .get_result::<Count>(&mut *conn)
            .expect("count rows")
            .n
    }
}
