//! Per-table CRUD handlers: one module per entity, five operations each.

pub mod bom;
pub mod materials;
pub mod panels;
pub mod projects;

use crate::error::AppError;

/// Path ids arrive as raw strings; anything non-numeric is rejected before
/// touching the database.
pub(crate) fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}
