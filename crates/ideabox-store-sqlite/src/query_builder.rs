//! SQL builder for partial updates.

use ideabox_types::{IdeaId, IdeaPatch, PatchValue};
use rusqlite::types::ToSql;

/// Builds `UPDATE ideas SET ... WHERE id = ?N` from the fields present in
/// `patch`. Returns `None` when nothing would be updated.
///
/// Column names come from `PatchField::column`; every value is bound as a
/// positional parameter.
pub(crate) fn build_patch_query(
    id: IdeaId,
    patch: &IdeaPatch,
) -> Option<(String, Vec<Box<dyn ToSql>>)> {
    let assignments = patch.assignments();
    if assignments.is_empty() {
        return None;
    }

    let mut sets = Vec::with_capacity(assignments.len());
    let mut params: Vec<Box<dyn ToSql>> = Vec::with_capacity(assignments.len() + 1);
    for (field, value) in assignments {
        let param: Box<dyn ToSql> = match value {
            PatchValue::Bool(b) => Box::new(b),
            PatchValue::Text(s) => Box::new(s),
        };
        params.push(param);
        sets.push(format!("{} = ?{}", field.column(), params.len()));
    }
    params.push(Box::new(id.get()));
    let sql = format!(
        "UPDATE ideas SET {} WHERE id = ?{}",
        sets.join(", "),
        params.len()
    );
    Some((sql, params))
}
