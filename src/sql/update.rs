//! Partial-update `SET` clause building
//!
//! Turns a sparse field → value map into `"<column>"=$<n>` clauses and an
//! index-aligned parameter list.

use crate::error::{JoblyError, Result};
use crate::sql::sanitize::{quote_identifier, validate_column_name};
use crate::types::{ColumnType, SqlValue};

/// Sparse update: external field name → new scalar value, in the order supplied
pub type UpdateRequest = serde_json::Map<String, serde_json::Value>;

/// Maps external (API-facing) field names to storage column names
pub trait ColumnResolver {
    /// Storage column for `field`; fields without a mapping keep their name
    fn column<'a>(&'a self, field: &'a str) -> &'a str;

    /// Storage type of `field`, used to type a NULL value
    fn column_type(&self, _field: &str) -> ColumnType {
        ColumnType::Text
    }
}

/// Resolver that keeps every field name as its column name
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityColumns;

impl ColumnResolver for IdentityColumns {
    fn column<'a>(&'a self, field: &'a str) -> &'a str {
        field
    }
}

/// Plain `(field, column)` pairs
impl ColumnResolver for [(&str, &str)] {
    fn column<'a>(&'a self, field: &'a str) -> &'a str {
        self.iter()
            .find(|(from, _)| *from == field)
            .map_or(field, |(_, to)| *to)
    }
}

impl<const N: usize> ColumnResolver for [(&str, &str); N] {
    fn column<'a>(&'a self, field: &'a str) -> &'a str {
        self.as_slice().column(field)
    }
}

/// `SET` clause fragment
#[derive(Debug, Clone, PartialEq)]
pub struct SetFragment {
    clauses: Vec<String>,
    params: Vec<SqlValue>,
}

impl SetFragment {
    /// Individual `"<column>"=$<n>` clauses
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    pub fn into_params(self) -> Vec<SqlValue> {
        self.params
    }

    /// Clauses joined for interpolation after `SET`
    pub fn to_sql(&self) -> String {
        self.clauses.join(", ")
    }

    /// Placeholder index for the first parameter after this fragment
    pub fn next_placeholder(&self) -> usize {
        self.params.len() + 1
    }
}

/// Build a `SET` fragment for a partial update
///
/// Clause `i` is `"<column>"=$i` where the column comes from `resolver`; the
/// value lands at `params[i - 1]`. Fails with [`JoblyError::EmptyUpdate`] when
/// `updates` is empty and with [`JoblyError::Validation`] when a resolved
/// column is not a plain identifier or a value is not a scalar.
///
/// # Example
/// ```
/// use jobly_store::sql::update::{build_partial_update, UpdateRequest};
///
/// let mut updates = UpdateRequest::new();
/// updates.insert("firstName".into(), "Aliya".into());
/// updates.insert("age".into(), 32.into());
///
/// let set = build_partial_update(&updates, &[("firstName", "first_name")]).unwrap();
/// assert_eq!(set.to_sql(), "\"first_name\"=$1, \"age\"=$2");
/// ```
pub fn build_partial_update<R>(updates: &UpdateRequest, resolver: &R) -> Result<SetFragment>
where
    R: ColumnResolver + ?Sized,
{
    if updates.is_empty() {
        return Err(JoblyError::EmptyUpdate);
    }

    let mut clauses = Vec::with_capacity(updates.len());
    let mut params = Vec::with_capacity(updates.len());

    for (field, value) in updates {
        let column = resolver.column(field);
        validate_column_name(column)?;

        params.push(SqlValue::from_json(value, resolver.column_type(field))?);
        clauses.push(format!("{}=${}", quote_identifier(column), params.len()));
    }

    Ok(SetFragment { clauses, params })
}

/// Reject any update key outside `allowed`
pub fn ensure_updatable(updates: &UpdateRequest, allowed: &[&str]) -> Result<()> {
    let disallowed = updates.keys().find(|k| !allowed.contains(&k.as_str()));
    match disallowed {
        Some(field) => Err(JoblyError::validation(format!(
            "Field '{}' cannot be updated",
            field
        ))),
        None => Ok(()),
    }
}
