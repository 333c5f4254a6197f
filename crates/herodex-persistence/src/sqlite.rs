use crate::traits::RecordStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use herodex_core::{HerodexError, HerodexResult, Page};
use herodex_domain::{Hero, HeroId};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Connection, Row};
use std::path::Path;
use uuid::Uuid;

const SCHEMA: &str = include_str!("schema.sql");

const COUNT_HEROES: &str = "SELECT COUNT(*) FROM hero";

const INSERT_HERO: &str = "INSERT INTO hero (id, alias, debut, first_name, last_name)
     VALUES (?, ?, ?, ?, ?)";

/// Paging must read in a deterministic order or windows can overlap or
/// skip rows between calls; alias with the id as tiebreak is total.
const GET_HEROES_PAGED: &str = "SELECT id, alias, debut, first_name, last_name FROM hero
     ORDER BY alias, id LIMIT ? OFFSET ?";

const GET_HERO: &str = "SELECT id, alias, debut, first_name, last_name FROM hero WHERE id = ?";

const UPDATE_HERO: &str = "UPDATE hero
     SET alias = ?, debut = ?, first_name = ?, last_name = ?
     WHERE id = ?";

const DELETE_HERO: &str = "DELETE FROM hero WHERE id = ?";

/// Record store backed by a SQLite database file.
///
/// Connection lifetime is scoped to a single operation: every call opens a
/// connection, runs one statement, and closes it before returning.
pub struct SqliteStore {
    options: SqliteConnectOptions,
}

impl SqliteStore {
    /// Open the database, creating the file and schema when missing.
    /// A failed connection or schema statement fails construction.
    pub async fn open(path: impl AsRef<Path>) -> HerodexResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .foreign_keys(true);

        let store = Self { options };
        let mut conn = store.connect().await?;
        sqlx::raw_sql(SCHEMA)
            .execute(&mut conn)
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        conn.close()
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;

        tracing::debug!("Opened sqlite store at {}", path.as_ref().display());
        Ok(store)
    }

    async fn connect(&self) -> HerodexResult<SqliteConnection> {
        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))
    }

    fn row_to_hero(row: &SqliteRow) -> HerodexResult<Hero> {
        let id: String = row.get("id");
        let debut: String = row.get("debut");
        Ok(Hero {
            id: Uuid::parse_str(&id)
                .map_err(|e| HerodexError::Serialization(format!("bad hero id {id}: {e}")))?,
            alias: row.get("alias"),
            debut: NaiveDate::parse_from_str(&debut, "%Y-%m-%d")
                .map_err(|e| HerodexError::Serialization(format!("bad debut {debut}: {e}")))?,
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
        })
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn size(&self) -> HerodexResult<usize> {
        let mut conn = self.connect().await?;
        let count: i64 = sqlx::query_scalar(COUNT_HEROES)
            .fetch_one(&mut conn)
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        conn.close()
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        Ok(count as usize)
    }

    async fn append(&mut self, hero: Hero) -> HerodexResult<HeroId> {
        let mut conn = self.connect().await?;
        sqlx::query(INSERT_HERO)
            .bind(hero.id.to_string())
            .bind(&hero.alias)
            .bind(hero.debut.format("%Y-%m-%d").to_string())
            .bind(&hero.first_name)
            .bind(&hero.last_name)
            .execute(&mut conn)
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        conn.close()
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        Ok(hero.id)
    }

    async fn get_page(&self, page: &Page) -> HerodexResult<Vec<Hero>> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query(GET_HEROES_PAGED)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&mut conn)
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        conn.close()
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        rows.iter().map(Self::row_to_hero).collect()
    }

    async fn get(&self, id: HeroId) -> HerodexResult<Option<Hero>> {
        let mut conn = self.connect().await?;
        let row = sqlx::query(GET_HERO)
            .bind(id.to_string())
            .fetch_optional(&mut conn)
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        conn.close()
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        row.as_ref().map(Self::row_to_hero).transpose()
    }

    async fn update(&mut self, id: HeroId, updated: &Hero) -> HerodexResult<bool> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(UPDATE_HERO)
            .bind(&updated.alias)
            .bind(updated.debut.format("%Y-%m-%d").to_string())
            .bind(&updated.first_name)
            .bind(&updated.last_name)
            .bind(id.to_string())
            .execute(&mut conn)
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        conn.close()
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&mut self, id: HeroId) -> HerodexResult<bool> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(DELETE_HERO)
            .bind(id.to_string())
            .execute(&mut conn)
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        conn.close()
            .await
            .map_err(|e| HerodexError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }
}
