// file: src/store/database/records.rs
use std::time::Instant;

use sqlx::{FromRow, SqlitePool};

use crate::error::{AppError, AppResult};
use crate::models::{Collection, Fields, Record, RecordId};
use crate::utils::logging::log_store_operation;

#[derive(Debug, FromRow)]
struct RecordRow {
    id: i64,
    owner: Option<String>,
    fields: String,
}

impl RecordRow {
    fn into_record(self) -> AppResult<Record> {
        let fields: Fields = serde_json::from_str(&self.fields)?;
        Ok(Record::new(self.id, self.owner, fields))
    }
}

pub async fn list_all(pool: &SqlitePool, collection: Collection) -> AppResult<Vec<Record>> {
    let started = Instant::now();
    let rows = sqlx::query_as::<_, RecordRow>(
        r#"
        SELECT id, owner, fields
        FROM records
        WHERE collection = ?
        ORDER BY id ASC
        "#,
    )
    .bind(collection.name())
    .fetch_all(pool)
    .await?;

    log_store_operation("list_all", collection.name(), started.elapsed().as_millis() as u64);
    rows.into_iter().map(RecordRow::into_record).collect()
}

pub async fn insert(
    pool: &SqlitePool,
    collection: Collection,
    fields: &Fields,
    owner: Option<&str>,
) -> AppResult<RecordId> {
    let started = Instant::now();
    let fields_json = serde_json::to_string(fields)?;

    let result = sqlx::query("INSERT INTO records (collection, owner, fields, created_at) VALUES (?, ?, ?, ?)")
        .bind(collection.name())
        .bind(owner)
        .bind(fields_json)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await?;

    log_store_operation("insert", collection.name(), started.elapsed().as_millis() as u64);
    Ok(result.last_insert_rowid())
}

pub async fn update_field(
    pool: &SqlitePool,
    collection: Collection,
    id: RecordId,
    field: &str,
    value: &str,
) -> AppResult<()> {
    let started = Instant::now();
    let mut tx = pool.begin().await?;

    let current: Option<String> = sqlx::query_scalar("SELECT fields FROM records WHERE id = ? AND collection = ?")
        .bind(id)
        .bind(collection.name())
        .fetch_optional(&mut *tx)
        .await?;
    let current = current.ok_or_else(|| AppError::not_found(format!("{}/{}", collection, id)))?;

    let mut fields: Fields = serde_json::from_str(&current)?;
    fields.insert(field.to_string(), value.to_string());

    sqlx::query("UPDATE records SET fields = ? WHERE id = ?")
        .bind(serde_json::to_string(&fields)?)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    log_store_operation("update_field", collection.name(), started.elapsed().as_millis() as u64);
    Ok(())
}

pub async fn delete(pool: &SqlitePool, collection: Collection, id: RecordId) -> AppResult<()> {
    let started = Instant::now();
    let result = sqlx::query("DELETE FROM records WHERE id = ? AND collection = ?")
        .bind(id)
        .bind(collection.name())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found(format!("{}/{}", collection, id)));
    }

    log_store_operation("delete", collection.name(), started.elapsed().as_millis() as u64);
    Ok(())
}
