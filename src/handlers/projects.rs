//! Projects CRUD.

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

/// One row of the Projects table.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub name: Option<String>,
    pub revision: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Create/update body. Update is a total replace: every column is written on
/// each PUT, so a field omitted here is stored as NULL, not preserved.
#[derive(Debug, Deserialize)]
pub struct ProjectPayload {
    pub name: Option<String>,
    pub revision: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let rows = sqlx::query_as::<_, Project>("SELECT * FROM Projects")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(rows))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    let id = parse_id(&id)?;
    let row = sqlx::query_as::<_, Project>("SELECT * FROM Projects WHERE id = ?")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound("Project"))?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query(
        "INSERT INTO Projects (name, revision, version, description) VALUES (?, ?, ?, ?)",
    )
    .bind(&body.name)
    .bind(&body.revision)
    .bind(&body.version)
    .bind(&body.description)
    .execute(&state.pool)
    .await?;
    Ok(created("Project created", "projectId", result.last_insert_id()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let result = sqlx::query(
        "UPDATE Projects SET name = ?, revision = ?, version = ?, description = ? WHERE id = ?",
    )
    .bind(&body.name)
    .bind(&body.revision)
    .bind(&body.version)
    .bind(&body.description)
    .bind(id)
    .execute(&state.pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Project"));
    }
    Ok(ack("Project updated"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let result = sqlx::query("DELETE FROM Projects WHERE id = ?")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Project"));
    }
    Ok(ack("Project deleted"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_defaults_missing_fields_to_null() {
        let p: ProjectPayload = serde_json::from_str(r#"{"name": "Rev A"}"#).unwrap();
        assert_eq!(p.name.as_deref(), Some("Rev A"));
        assert!(p.revision.is_none());
        assert!(p.version.is_none());
        assert!(p.description.is_none());
    }

    #[test]
    fn payload_rejects_wrong_types() {
        assert!(serde_json::from_str::<ProjectPayload>(r#"{"name": 5}"#).is_err());
        assert!(serde_json::from_str::<ProjectPayload>("[]").is_err());
    }
}
