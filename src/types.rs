//! Core value types shared by the statement builders and the executor
//!
//! Includes column storage types, scalar parameter values, and the final
//! statement handed to an [`Executor`](crate::executor::Executor).

use serde::{Deserialize, Serialize};

use crate::error::{JoblyError, Result};

/// Storage type of a column
///
/// Only needed where the executor has to bind a typed NULL.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// TEXT / VARCHAR
    #[default]
    Text,
    /// INTEGER
    Integer,
    /// NUMERIC
    Numeric,
}

impl ColumnType {
    /// PostgreSQL type name used in DDL
    pub fn to_sql_type(self) -> &'static str {
        match self {
            ColumnType::Text => "TEXT",
            ColumnType::Integer => "INTEGER",
            ColumnType::Numeric => "NUMERIC",
        }
    }
}

/// A scalar statement parameter
///
/// Values only ever travel in the parameter list, never in SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL, typed after the column it is bound to
    Null(ColumnType),
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    /// Convert a JSON scalar into a parameter
    ///
    /// `column_type` only decides how a JSON `null` gets typed. Arrays and
    /// objects are rejected.
    pub fn from_json(value: &serde_json::Value, column_type: ColumnType) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(SqlValue::Null(column_type)),
            serde_json::Value::Bool(b) => Ok(SqlValue::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(SqlValue::Int(i))
                } else {
                    n.as_f64().map(SqlValue::Float).ok_or_else(|| {
                        JoblyError::validation(format!("Number {} is out of range", n))
                    })
                }
            }
            serde_json::Value::String(s) => Ok(SqlValue::Text(s.clone())),
            other => Err(JoblyError::validation(format!(
                "Expected a scalar value, got {}",
                other
            ))),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(i64::from(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

/// Nullable text (e.g. `logo_url`)
impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(SqlValue::Null(ColumnType::Text), SqlValue::Text)
    }
}

impl From<Option<i32>> for SqlValue {
    fn from(value: Option<i32>) -> Self {
        value.map_or(SqlValue::Null(ColumnType::Integer), SqlValue::from)
    }
}

/// Nullable NUMERIC (e.g. `equity`)
impl From<Option<f64>> for SqlValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(SqlValue::Null(ColumnType::Numeric), SqlValue::Float)
    }
}

/// A complete statement: SQL text plus its positional parameters
///
/// `params[i]` is bound to placeholder `$(i + 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlValue>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }
}
