// ABOUTME: HTTP request handlers for person operations
// ABOUTME: Validates the id and body up front, then runs exactly one storage call

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
};
use tracing::{debug, info};

use roster_storage::{Person, PersonInput};

use super::response::{ApiError, ApiResult, ResultBody};
use super::AppState;

fn person_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    id.map(|Path(id)| id).map_err(|_| ApiError::InvalidId)
}

// The body is decoded as JSON whatever its Content-Type says.
fn person_input(body: &[u8]) -> ApiResult<PersonInput> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// List all persons
pub async fn list_persons(State(state): State<AppState>) -> ApiResult<ResponseJson<Vec<Person>>> {
    info!("Listing persons");

    let persons = state.persons.list_persons().await?;
    Ok(ResponseJson(persons))
}

/// Get a single person by ID
pub async fn get_person(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<ResponseJson<Person>> {
    let id = person_id(id)?;
    info!("Getting person: {}", id);

    let person = state.persons.get_person(id).await?;
    Ok(ResponseJson(person))
}

/// Create a new person and return it with its assigned ID
pub async fn create_person(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, ResponseJson<Person>)> {
    let input = person_input(&body)?;
    info!("Creating person: {}", input.name);

    let person = state.persons.create_person(input).await?;
    Ok((StatusCode::CREATED, ResponseJson(person)))
}

/// Update a person's name and sex
pub async fn update_person(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> ApiResult<ResponseJson<ResultBody>> {
    let id = person_id(id)?;
    let input = person_input(&body)?;
    info!("Updating person: {}", id);

    let affected = state.persons.update_person(id, input).await?;
    if affected == 0 {
        debug!("Update matched no rows for person {}", id);
    }

    Ok(ResponseJson(ResultBody::success()))
}

/// Delete a person
pub async fn delete_person(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<ResponseJson<ResultBody>> {
    let id = person_id(id)?;
    info!("Deleting person: {}", id);

    let affected = state.persons.delete_person(id).await?;
    if affected == 0 {
        debug!("Delete matched no rows for person {}", id);
    }

    Ok(ResponseJson(ResultBody::success()))
}
