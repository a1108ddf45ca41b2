//! Panels CRUD.

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
pub struct Panel {
    pub id: i64,
    pub project_id: Option<i64>,
    pub part_number: Option<String>,
    pub multiplication: Option<i64>,
    pub stencil_position: Option<String>,
}

/// Create/update body. Update overwrites every column; omitted fields are
/// stored as NULL.
#[derive(Debug, Deserialize)]
pub struct PanelPayload {
    pub project_id: Option<i64>,
    pub part_number: Option<String>,
    pub multiplication: Option<i64>,
    pub stencil_position: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Panel>>, AppError> {
    let rows = sqlx::query_as::<_, Panel>("SELECT * FROM Panels")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(rows))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Panel>, AppError> {
    let id = parse_id(&id)?;
    let row = sqlx::query_as::<_, Panel>("SELECT * FROM Panels WHERE id = ?")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound("Panel"))?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<PanelPayload>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query(
        "INSERT INTO Panels (project_id, part_number, multiplication, stencil_position) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(body.project_id)
    .bind(&body.part_number)
    .bind(body.multiplication)
    .bind(&body.stencil_position)
    .execute(&state.pool)
    .await?;
    Ok(created("Panel created", "panelId", result.last_insert_id()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PanelPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let result = sqlx::query(
        "UPDATE Panels SET project_id = ?, part_number = ?, multiplication = ?, \
         stencil_position = ? WHERE id = ?",
    )
    .bind(body.project_id)
    .bind(&body.part_number)
    .bind(body.multiplication)
    .bind(&body.stencil_position)
    .bind(id)
    .execute(&state.pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Panel"));
    }
    Ok(ack("Panel updated"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let result = sqlx::query("DELETE FROM Panels WHERE id = ?")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Panel"));
    }
    Ok(ack("Panel deleted"))
}
