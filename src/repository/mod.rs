//! Company and job repositories
//!
//! Repositories compose builder fragments with fixed statement skeletons, run
//! them through an [`Executor`](crate::executor::Executor) and turn the
//! returned rows into records.

pub mod company;
pub mod job;

pub use company::CompanyRepository;
pub use job::JobRepository;

use serde::de::DeserializeOwned;

use crate::error::{JoblyError, Result};
use crate::executor::Row;

/// Deserialize a row keyed by output alias into a record
fn from_row<T: DeserializeOwned>(row: Row) -> Result<T> {
    Ok(serde_json::from_value(serde_json::Value::Object(row))?)
}

fn from_rows<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>> {
    rows.into_iter().map(from_row).collect()
}

/// First row as a record, or `NotFound(missing)` when there is none
fn first_or_not_found<T: DeserializeOwned>(rows: Vec<Row>, missing: String) -> Result<T> {
    match rows.into_iter().next() {
        Some(row) => from_row(row),
        None => Err(JoblyError::NotFound(missing)),
    }
}

/// Row returned by an `INSERT … RETURNING`
fn inserted<T: DeserializeOwned>(rows: Vec<Row>) -> Result<T> {
    match rows.into_iter().next() {
        Some(row) => from_row(row),
        None => Err(JoblyError::storage("INSERT returned no row")),
    }
}
