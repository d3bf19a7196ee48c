use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::{sort_directives, AppState};
use crate::csv::format_body;
use crate::delimiter::Delimiter;
use crate::error::MergeError;
use crate::row::Row;
use crate::sort::sort_rows;
use crate::sort_key::parse_sort_keys;
use crate::store::Record;

#[derive(Debug, Deserialize)]
pub struct CreateRecord {
    #[serde(rename = "Line", alias = "line")]
    pub line: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsvBody {
    pub body: String,
}

/// POST /records
pub async fn create_record(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateRecord>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Record>), ApiError> {
    let delimiter = Delimiter::detect(&request.line).ok_or(ApiError::InvalidDelimiter)?;

    let found = Row::parse(&request.line, delimiter).len();
    if found != state.schema().len() {
        return Err(
            MergeError::RowLengthMismatch {
                source_id: "request".to_string(),
                line: 1,
                expected: state.schema().len(),
                found,
            }.into()
        );
    }

    let record = state.store().create(request.line, delimiter);
    log::info!("Created record {}, delimiter: {}", record.id, delimiter);
    let location = format!("/records/api/{}", record.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(record)))
}

/// GET /records/:sort
///
/// The CSV body has no header line.
pub async fn list_records(
    State(state): State<Arc<AppState>>,
    Path(sort): Path<String>,
) -> Result<Json<CsvBody>, ApiError> {
    let records = state.store().list();
    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        let delimiter = record
            .delimiter()
            .ok_or_else(|| ApiError::Internal(format!("record {} has an invalid delimiter", record.id)))?;
        rows.push(Row::parse(&record.line, delimiter));
    }

    let directives = sort_directives(&sort);
    let sort_keys = parse_sort_keys(directives.as_slice(), state.schema())?;
    let rows = sort_rows(rows, &sort_keys);
    log::info!("Listing {} records, sort: {}", rows.len(), sort);
    Ok(Json(CsvBody { body: format_body(&rows, state.endl()) }))
}

/// GET /records/api/:id
pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Record>, ApiError> {
    state
        .store()
        .get(id)
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}
