use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

use crate::domain::models::{InteractionRecord, NewInteraction, NewPet, Pet};
use crate::storage::connection::DbConnection;
use crate::storage::traits::{PetStorage, WriteOutcome};

/// SQLite-backed repository for pets and their interaction records
#[derive(Clone)]
pub struct PetRepository {
    db: DbConnection,
}

impl PetRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

fn parse_timestamp(value: &str, column: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Corrupt {} timestamp in database: {}", column, value))?
        .with_timezone(&Utc))
}

fn pet_from_row(row: &SqliteRow) -> Result<Pet> {
    let birthday: String = row.try_get("birthday")?;
    Ok(Pet {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        birthday: parse_timestamp(&birthday, "birthday")?,
        hunger_level: row.try_get("hunger_level")?,
        happiness_level: row.try_get("happiness_level")?,
        version: row.try_get("version")?,
    })
}

fn interaction_from_row(row: &SqliteRow) -> Result<InteractionRecord> {
    let kind: String = row.try_get("kind")?;
    let occurred_at: String = row.try_get("occurred_at")?;
    Ok(InteractionRecord {
        id: row.try_get("id")?,
        kind: kind.parse()?,
        pet_id: row.try_get("pet_id")?,
        occurred_at: parse_timestamp(&occurred_at, "occurred_at")?,
    })
}

#[async_trait]
impl PetStorage for PetRepository {
    async fn list_pets(&self) -> Result<Vec<Pet>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, birthday, hunger_level, happiness_level, version
            FROM pets
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(pet_from_row).collect()
    }

    async fn get_pet(&self, pet_id: i64) -> Result<Option<Pet>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, birthday, hunger_level, happiness_level, version
            FROM pets
            WHERE id = ?
            "#,
        )
        .bind(pet_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(pet_from_row).transpose()
    }

    async fn pet_exists(&self, pet_id: i64) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM pets WHERE id = ?")
            .bind(pet_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.is_some())
    }

    async fn insert_pet(&self, pet: &NewPet) -> Result<WriteOutcome<Pet>> {
        // A NULL id makes SQLite assign the next rowid
        let result = sqlx::query(
            r#"
            INSERT INTO pets (id, name, birthday, hunger_level, happiness_level, version)
            VALUES (?, ?, ?, ?, ?, 0)
            "#,
        )
        .bind(pet.id)
        .bind(&pet.name)
        .bind(pet.birthday.to_rfc3339())
        .bind(pet.hunger_level)
        .bind(pet.happiness_level)
        .execute(self.db.pool())
        .await;

        let done = match result {
            Ok(done) => done,
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                debug!("Pet id {:?} already taken", pet.id);
                return Ok(WriteOutcome::Conflict);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(WriteOutcome::Applied(Pet {
            id: done.last_insert_rowid(),
            name: pet.name.clone(),
            birthday: pet.birthday,
            hunger_level: pet.hunger_level,
            happiness_level: pet.happiness_level,
            version: 0,
        }))
    }

    async fn update_pet(&self, pet: &Pet, expected_version: i64) -> Result<WriteOutcome<Pet>> {
        let result = sqlx::query(
            r#"
            UPDATE pets
            SET name = ?, hunger_level = ?, happiness_level = ?, version = version + 1
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(&pet.name)
        .bind(pet.hunger_level)
        .bind(pet.happiness_level)
        .bind(pet.id)
        .bind(expected_version)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            debug!("Stale write to pet {} at version {}", pet.id, expected_version);
            return Ok(WriteOutcome::Conflict);
        }

        Ok(WriteOutcome::Applied(Pet {
            version: expected_version + 1,
            ..pet.clone()
        }))
    }

    async fn delete_pet(&self, pet_id: i64) -> Result<bool> {
        let mut tx = self.db.pool().begin().await?;

        sqlx::query("DELETE FROM interactions WHERE pet_id = ?")
            .bind(pet_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(pet_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    async fn record_interaction(
        &self,
        updated: &Pet,
        expected_version: i64,
        interaction: &NewInteraction,
    ) -> Result<WriteOutcome<InteractionRecord>> {
        let mut tx = self.db.pool().begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE pets
            SET hunger_level = ?, happiness_level = ?, version = version + 1
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(updated.hunger_level)
        .bind(updated.happiness_level)
        .bind(updated.id)
        .bind(expected_version)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            debug!("Stale interaction on pet {} at version {}", updated.id, expected_version);
            return Ok(WriteOutcome::Conflict);
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO interactions (pet_id, kind, occurred_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(interaction.pet_id)
        .bind(interaction.kind.as_str())
        .bind(interaction.occurred_at.to_rfc3339())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(WriteOutcome::Applied(InteractionRecord {
            id: inserted.last_insert_rowid(),
            kind: interaction.kind,
            pet_id: interaction.pet_id,
            occurred_at: interaction.occurred_at,
        }))
    }

    async fn list_interactions(&self, pet_id: i64) -> Result<Vec<InteractionRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, pet_id, kind, occurred_at
            FROM interactions
            WHERE pet_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(pet_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(interaction_from_row).collect()
    }
}
