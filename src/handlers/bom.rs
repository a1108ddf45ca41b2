//! BOM (bill of materials) CRUD.
//!
//! BOM rows reference Projects and Materials by id, but no referential check
//! happens here: a row pointing at a nonexistent project or material inserts
//! fine. Integrity, if any, lives in the database schema.

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

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct BomEntry {
    pub id: i64,
    pub project_id: Option<i64>,
    pub panel_type: Option<String>,
    pub multiplication: Option<i64>,
    pub material_id: Option<i64>,
    pub quantity: Option<i64>,
}

/// Create/update body. Update overwrites every column; omitted fields are
/// stored as NULL.
#[derive(Debug, Deserialize)]
pub struct BomPayload {
    pub project_id: Option<i64>,
    pub panel_type: Option<String>,
    pub multiplication: Option<i64>,
    pub material_id: Option<i64>,
    pub quantity: Option<i64>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BomEntry>>, AppError> {
    let rows = sqlx::query_as::<_, BomEntry>("SELECT * FROM BOM")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(rows))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BomEntry>, AppError> {
    let id = parse_id(&id)?;
    let row = sqlx::query_as::<_, BomEntry>("SELECT * FROM BOM WHERE id = ?")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound("BOM"))?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<BomPayload>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query(
        "INSERT INTO BOM (project_id, panel_type, multiplication, material_id, quantity) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(body.project_id)
    .bind(&body.panel_type)
    .bind(body.multiplication)
    .bind(body.material_id)
    .bind(body.quantity)
    .execute(&state.pool)
    .await?;
    Ok(created("BOM created", "bomId", result.last_insert_id()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<BomPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let result = sqlx::query(
        "UPDATE BOM SET project_id = ?, panel_type = ?, multiplication = ?, material_id = ?, \
         quantity = ? WHERE id = ?",
    )
    .bind(body.project_id)
    .bind(&body.panel_type)
    .bind(body.multiplication)
    .bind(body.material_id)
    .bind(body.quantity)
    .bind(id)
    .execute(&state.pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("BOM"));
    }
    Ok(ack("BOM updated"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let result = sqlx::query("DELETE FROM BOM WHERE id = ?")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("BOM"));
    }
    Ok(ack("BOM deleted"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_unknown_references() {
        // No referential check at this layer: any numeric ids deserialize.
        let b: BomPayload = serde_json::from_str(
            r#"{"project_id": 99999, "material_id": 99999, "quantity": 4}"#,
        )
        .unwrap();
        assert_eq!(b.project_id, Some(99999));
        assert_eq!(b.quantity, Some(4));
        assert!(b.panel_type.is_none());
    }
}
