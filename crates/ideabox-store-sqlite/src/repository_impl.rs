//! `IdeaRepository` trait implementation for `SqliteIdeaRepository`.

use async_trait::async_trait;
use ideabox_registry::{IdeaRepository, RepositoryError};
use ideabox_types::{DayCount, Idea, IdeaId, IdeaPatch, IdeaReplace, IdeaStats, NewIdea};
use rusqlite::{params, Connection};

use crate::query_builder::build_patch_query;
use crate::repository::SqliteIdeaRepository;
use crate::row_mapping::{row_to_idea, OptionalExt, COLS};

/// Maps a `rusqlite::Error` to a `RepositoryError::Storage`.
fn map_sqlite_err(e: rusqlite::Error) -> RepositoryError {
    RepositoryError::Storage {
        message: e.to_string(),
    }
}

/// Counts rows matching `where_clause`, which may reference `?1`.
fn count_where(
    conn: &Connection,
    where_clause: &str,
    param: Option<&str>,
) -> Result<u64, RepositoryError> {
    let sql = format!("SELECT COUNT(*) FROM ideas WHERE {where_clause}");
    let count: i64 = match param {
        Some(p) => conn.query_row(&sql, params![p], |row| row.get(0)),
        None => conn.query_row(&sql, [], |row| row.get(0)),
    }
    .map_err(map_sqlite_err)?;
    Ok(u64::try_from(count).unwrap_or_default())
}

/// Prefix match on the raw `date` text. Unlike `LIKE`, this is
/// case-sensitive and gives `%`/`_` no special meaning.
const DATE_PREFIX: &str = "substr(date, 1, length(?1)) = ?1";

#[async_trait]
impl IdeaRepository for SqliteIdeaRepository {
    async fn list(&self) -> Result<Vec<Idea>, RepositoryError> {
        let conn = self.lock_conn()?;
        let sql = format!("SELECT {COLS} FROM ideas ORDER BY date DESC, id DESC");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let ideas = stmt
            .query_map([], row_to_idea)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(ideas)
    }

    async fn find_by_id(&self, id: IdeaId) -> Result<Option<Idea>, RepositoryError> {
        let conn = self.lock_conn()?;
        let sql = format!("SELECT {COLS} FROM ideas WHERE id = ?1");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let result = stmt
            .query_row(params![id.get()], row_to_idea)
            .optional()
            .map_err(map_sqlite_err)?;
        Ok(result)
    }

    async fn insert(&self, idea: &NewIdea) -> Result<IdeaId, RepositoryError> {
        idea.validate()?;
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO ideas (title, content, category, date, completed) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                idea.title,
                idea.content,
                idea.category,
                idea.date,
                idea.completed,
            ],
        )
        .map_err(map_sqlite_err)?;
        let id = IdeaId::new(conn.last_insert_rowid());
        tracing::debug!(%id, "idea inserted");
        Ok(id)
    }

    async fn replace(&self, id: IdeaId, idea: &IdeaReplace) -> Result<(), RepositoryError> {
        idea.validate()?;
        let conn = self.lock_conn()?;
        let affected = conn
            .execute(
                "UPDATE ideas SET title = ?2, content = ?3, category = ?4 WHERE id = ?1",
                params![id.get(), idea.title, idea.content, idea.category],
            )
            .map_err(map_sqlite_err)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound { id });
        }
        Ok(())
    }

    async fn patch(&self, id: IdeaId, patch: &IdeaPatch) -> Result<(), RepositoryError> {
        patch.validate()?;
        let (sql, param_values) =
            build_patch_query(id, patch).ok_or_else(|| RepositoryError::Validation {
                message: "nothing to update".to_string(),
            })?;
        let conn = self.lock_conn()?;
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let affected = conn
            .execute(&sql, params_refs.as_slice())
            .map_err(map_sqlite_err)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound { id });
        }
        Ok(())
    }

    async fn delete(&self, id: IdeaId) -> Result<(), RepositoryError> {
        let conn = self.lock_conn()?;
        let affected = conn
            .execute("DELETE FROM ideas WHERE id = ?1", params![id.get()])
            .map_err(map_sqlite_err)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound { id });
        }
        Ok(())
    }

    async fn stats(&self, today: &str) -> Result<IdeaStats, RepositoryError> {
        let conn = self.lock_conn()?;
        let total = count_where(&conn, "1 = 1", None)?;
        let completed = count_where(&conn, "completed = 1", None)?;
        let today_count = count_where(&conn, DATE_PREFIX, Some(today))?;
        Ok(IdeaStats::from_counts(total, completed, today_count))
    }

    async fn daily_counts(&self, days: &[String]) -> Result<Vec<DayCount>, RepositoryError> {
        let conn = self.lock_conn()?;
        let mut counts = Vec::with_capacity(days.len());
        for day in days {
            counts.push(DayCount {
                date: day.clone(),
                count: count_where(&conn, DATE_PREFIX, Some(day.as_str()))?,
            });
        }
        Ok(counts)
    }
}
