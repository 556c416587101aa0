// file: src/store/database/mod.rs

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePool, Sqlite};

use super::RecordStore;
use crate::error::AppResult;
use crate::models::{Collection, Fields, Record, RecordId};

pub mod records;

#[derive(Clone, Debug)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        let db_url = format!("sqlite:{}?mode=rwc", path.display());

        // Create database if it doesn't exist
        let db_exists = Sqlite::database_exists(&db_url)
            .await
            .context("Failed to check if database exists")?;
        if !db_exists {
            info!("Creating database");
            Sqlite::create_database(&db_url)
                .await
                .context("Failed to create database")?;
        }

        let pool = SqlitePool::connect(&db_url)
            .await
            .context("Failed to connect to database")?;

        run_schema(&pool).await.context("Failed to run database schema")?;

        info!("Database initialized successfully");

        Ok(Database { pool })
    }
}

impl RecordStore for Database {
    async fn list_all(&self, collection: Collection) -> AppResult<Vec<Record>> {
        records::list_all(&self.pool, collection).await
    }

    async fn add(&self, collection: Collection, fields: Fields, owner: Option<String>) -> AppResult<RecordId> {
        records::insert(&self.pool, collection, &fields, owner.as_deref()).await
    }

    async fn update_field(&self, collection: Collection, id: RecordId, field: &str, value: &str) -> AppResult<()> {
        records::update_field(&self.pool, collection, id, field, value).await
    }

    async fn remove(&self, collection: Collection, id: RecordId) -> AppResult<()> {
        records::delete(&self.pool, collection, id).await
    }
}

async fn run_schema(pool: &SqlitePool) -> Result<()> {
    let schema = include_str!("schema.sql");

    let mut current_statement = String::new();
    for line in schema.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("--") || trimmed.is_empty() {
            continue;
        }

        current_statement.push_str(line);
        current_statement.push('\n');

        if trimmed.ends_with(';') {
            sqlx::query(&current_statement).execute(pool).await?;
            current_statement.clear();
        }
    }
    Ok(())
}
