// ABOUTME: Person storage layer using PostgreSQL
// ABOUTME: One parameterized statement per operation against the person_data table

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::types::{Person, PersonInput};
use crate::{StorageError, StorageResult};

/// Storage operations the HTTP layer depends on
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Round-trip to the backend to confirm it is reachable
    async fn ping(&self) -> StorageResult<()>;

    async fn list_persons(&self) -> StorageResult<Vec<Person>>;

    async fn get_person(&self, id: i64) -> StorageResult<Person>;

    /// Insert a new row and return it with the id the database assigned
    async fn create_person(&self, input: PersonInput) -> StorageResult<Person>;

    /// Overwrite name and sex. Returns the number of rows affected, which is
    /// zero when the id does not exist.
    async fn update_person(&self, id: i64, input: PersonInput) -> StorageResult<u64>;

    /// Returns the number of rows removed, zero when the id does not exist.
    async fn delete_person(&self, id: i64) -> StorageResult<u64>;
}

pub struct PgPersonStorage {
    pool: PgPool,
}

impl PgPersonStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// Ids are widened to BIGINT so SERIAL and BIGSERIAL tables decode the same way.
const SELECT_ALL: &str = "SELECT id::BIGINT AS id, name, sex FROM person_data ORDER BY id";
const SELECT_ONE: &str = "SELECT id::BIGINT AS id, name, sex FROM person_data WHERE id = $1";
const INSERT: &str =
    "INSERT INTO person_data (name, sex) VALUES ($1, $2) RETURNING id::BIGINT AS id, name, sex";
const UPDATE: &str = "UPDATE person_data SET name = $1, sex = $2 WHERE id = $3";
const DELETE: &str = "DELETE FROM person_data WHERE id = $1";

#[async_trait]
impl PersonStore for PgPersonStorage {
    async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(StorageError::Database)?;
        Ok(())
    }

    async fn list_persons(&self) -> StorageResult<Vec<Person>> {
        debug!("Fetching all persons");

        let persons = sqlx::query_as::<_, Person>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Database)?;

        Ok(persons)
    }

    async fn get_person(&self, id: i64) -> StorageResult<Person> {
        debug!("Fetching person: {}", id);

        sqlx::query_as::<_, Person>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Database)?
            .ok_or(StorageError::NotFound(id))
    }

    async fn create_person(&self, input: PersonInput) -> StorageResult<Person> {
        debug!("Creating person (name: {})", input.name);

        let person = sqlx::query_as::<_, Person>(INSERT)
            .bind(&input.name)
            .bind(&input.sex)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Database)?;

        debug!("Created person: {}", person.id);
        Ok(person)
    }

    async fn update_person(&self, id: i64, input: PersonInput) -> StorageResult<u64> {
        debug!("Updating person: {}", id);

        let result = sqlx::query(UPDATE)
            .bind(&input.name)
            .bind(&input.sex)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Database)?;

        Ok(result.rows_affected())
    }

    async fn delete_person(&self, id: i64) -> StorageResult<u64> {
        debug!("Deleting person: {}", id);

        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Database)?;

        Ok(result.rows_affected())
    }
}
