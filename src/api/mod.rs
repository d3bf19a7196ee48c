//! HTTP record store
//!
//! # Endpoints
//!
//! - `POST /records` - store one delimited line, body `{"Line": "..."}`
//! - `GET /records/:sort` - all records as CSV rows sorted by `color`, `birthdate` or `name`
//! - `GET /records/api/:id` - one stored record

pub mod error;
pub mod records;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::csv::PLATFORM_ENDL;
use crate::schema::Schema;
use crate::store::RecordStore;

/// Columns of every stored line
pub const RECORD_COLUMNS: [&str; 5] = ["LastName", "FirstName", "Email", "FavoriteColor", "DateOfBirth"];

/// Application state shared across handlers.
pub struct AppState {
    store: Arc<dyn RecordStore>,
    schema: Schema,
    endl: String,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> AppState {
        AppState {
            store,
            schema: Schema::new(RECORD_COLUMNS.iter().map(|name| name.to_string()).collect()),
            endl: PLATFORM_ENDL.to_string(),
        }
    }

    /// Set the line separator of the CSV bodies
    pub fn with_endl(mut self, endl: &str) -> AppState {
        self.endl = endl.to_string();
        self
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn endl(&self) -> &str {
        &self.endl
    }
}

/// Map a sort keyword to sort directives. Unknown keywords do not sort.
pub fn sort_directives(keyword: &str) -> Vec<&'static str> {
    match keyword.to_lowercase().as_str() {
        "color" => vec!["FavoriteColor:asc"],
        "birthdate" => vec!["DateOfBirth:asc"],
        "name" => vec!["LastName:asc"],
        _ => vec![],
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/records", post(records::create_record))
        .route("/records/:sort", get(records::list_records))
        .route("/records/api/:id", get(records::get_record))
        .with_state(state)
}
