//! Materials CRUD.

use super::parse_id;
use crate::error::AppError;
use crate::response::{ack, created};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

/// One row of the Materials table. `moisture_sensitive` is a MySQL
/// TINYINT(1), decoded as a boolean.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Material {
    pub id: i64,
    pub part_number: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub barcode: Option<String>,
    pub package_type: Option<String>,
    pub moisture_sensitive: Option<bool>,
}

/// Create/update body. Update overwrites every column; omitted fields are
/// stored as NULL.
#[derive(Debug, Deserialize)]
pub struct MaterialPayload {
    pub part_number: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub barcode: Option<String>,
    pub package_type: Option<String>,
    pub moisture_sensitive: Option<bool>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Material>>, AppError> {
    let rows = sqlx::query_as::<_, Material>("SELECT * FROM Materials")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(rows))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Material>, AppError> {
    let id = parse_id(&id)?;
    let row = sqlx::query_as::<_, Material>("SELECT * FROM Materials WHERE id = ?")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound("Material"))?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<MaterialPayload>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query(
        "INSERT INTO Materials (part_number, name, description, barcode, package_type, moisture_sensitive) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&body.part_number)
    .bind(&body.name)
    .bind(&body.description)
    .bind(&body.barcode)
    .bind(&body.package_type)
    .bind(body.moisture_sensitive)
    .execute(&state.pool)
    .await?;
    Ok(created("Material created", "materialId", result.last_insert_id()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<MaterialPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let result = sqlx::query(
        "UPDATE Materials SET part_number = ?, name = ?, description = ?, barcode = ?, \
         package_type = ?, moisture_sensitive = ? WHERE id = ?",
    )
    .bind(&body.part_number)
    .bind(&body.name)
    .bind(&body.description)
    .bind(&body.barcode)
    .bind(&body.package_type)
    .bind(body.moisture_sensitive)
    .bind(id)
    .execute(&state.pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Material"));
    }
    Ok(ack("Material updated"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let result = sqlx::query("DELETE FROM Materials WHERE id = ?")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Material"));
    }
    Ok(ack("Material deleted"))
}
