//! Row-to-domain mapping for the SQLite idea repository.

use ideabox_types::{Idea, IdeaId};

/// Column list shared by every SELECT.
pub(crate) const COLS: &str = "id, title, content, category, date, completed";

/// Maps a SQLite row selected with [`COLS`] to an `Idea`.
pub(crate) fn row_to_idea(row: &rusqlite::Row<'_>) -> rusqlite::Result<Idea> {
    Ok(Idea {
        id: IdeaId::new(row.get(0)?),
        title: row.get(1)?,
        content: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
        completed: row.get(5)?,
    })
}

/// Extension trait for optional query results.
pub(crate) trait OptionalExt<T> {
    /// Converts a "no rows" error into `Ok(None)`.
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
