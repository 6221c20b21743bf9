//! Statement execution
//!
//! Repositories only depend on [`Executor`]; [`PgExecutor`] runs statements on
//! a PostgreSQL pool and decodes rows into JSON maps keyed by output alias.

use std::future::Future;

use rust_decimal::prelude::ToPrimitive;
use sqlx::postgres::{PgArguments, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row as _, TypeInfo};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{JoblyError, Result};
use crate::sql::ddl::DdlGenerator;
use crate::types::{ColumnType, SqlValue, Statement};

/// A returned row: output alias → value
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Runs a parameterized statement and returns its rows
///
/// Statements without a result set (or with an empty `RETURNING`) yield an
/// empty vector. Failures are reported as [`JoblyError::UniqueViolation`],
/// [`JoblyError::ForeignKeyViolation`] or [`JoblyError::Storage`].
pub trait Executor: Send + Sync {
    fn execute(&self, statement: &Statement) -> impl Future<Output = Result<Vec<Row>>> + Send;
}

/// [`Executor`] over an sqlx PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    /// Connect using `config` and create missing tables when
    /// `config.ensure_tables` is set
    pub async fn new(config: &StoreConfig) -> Result<Self> {
        config.validate()?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                JoblyError::Connection(format!("Database connection failed: {}", e))
            })?;

        let executor = Self { pool };
        if config.ensure_tables {
            executor.ensure_tables(config).await?;
        }
        Ok(executor)
    }

    /// Wrap an existing pool; no tables are created
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the companies and jobs tables if they do not exist
    pub async fn ensure_tables(&self, config: &StoreConfig) -> Result<()> {
        for sql in DdlGenerator::new(config).generate_all() {
            sqlx::query(&sql).execute(&self.pool).await?;
        }
        info!(
            companies = %config.companies_table,
            jobs = %config.jobs_table,
            "ensured tables"
        );
        Ok(())
    }

    /// Drop both tables
    pub async fn drop_tables(&self, config: &StoreConfig) -> Result<()> {
        for sql in DdlGenerator::new(config).generate_drop_tables() {
            sqlx::query(&sql).execute(&self.pool).await?;
        }
        Ok(())
    }

    fn bind_value<'q>(
        query: Query<'q, Postgres, PgArguments>,
        value: &'q SqlValue,
    ) -> Query<'q, Postgres, PgArguments> {
        match value {
            SqlValue::Null(ColumnType::Text) => query.bind(None::<String>),
            SqlValue::Null(ColumnType::Integer) => query.bind(None::<i64>),
            SqlValue::Null(ColumnType::Numeric) => query.bind(None::<rust_decimal::Decimal>),
            SqlValue::Bool(b) => query.bind(*b),
            SqlValue::Int(i) => query.bind(*i),
            SqlValue::Float(f) => query.bind(*f),
            SqlValue::Text(s) => query.bind(s.as_str()),
        }
    }

    fn decode_row(row: &PgRow) -> Result<Row> {
        let mut decoded = Row::new();
        for column in row.columns() {
            let value = Self::decode_column(row, column.ordinal(), column.type_info().name())?;
            decoded.insert(column.name().to_string(), value);
        }
        Ok(decoded)
    }

    fn decode_column(row: &PgRow, index: usize, type_name: &str) -> Result<serde_json::Value> {
        use serde_json::Value;

        let value = match type_name {
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => row
                .try_get::<Option<String>, _>(index)?
                .map_or(Value::Null, Value::String),
            "INT2" => row
                .try_get::<Option<i16>, _>(index)?
                .map_or(Value::Null, Value::from),
            "INT4" => row
                .try_get::<Option<i32>, _>(index)?
                .map_or(Value::Null, Value::from),
            "INT8" => row
                .try_get::<Option<i64>, _>(index)?
                .map_or(Value::Null, Value::from),
            "NUMERIC" => row
                .try_get::<Option<rust_decimal::Decimal>, _>(index)?
                .and_then(|d| d.to_f64())
                .and_then(serde_json::Number::from_f64)
                .map_or(Value::Null, Value::Number),
            "FLOAT4" => row
                .try_get::<Option<f32>, _>(index)?
                .and_then(|f| serde_json::Number::from_f64(f64::from(f)))
                .map_or(Value::Null, Value::Number),
            "FLOAT8" => row
                .try_get::<Option<f64>, _>(index)?
                .and_then(serde_json::Number::from_f64)
                .map_or(Value::Null, Value::Number),
            "BOOL" => row
                .try_get::<Option<bool>, _>(index)?
                .map_or(Value::Null, Value::Bool),
            "JSON" | "JSONB" => row
                .try_get::<Option<Value>, _>(index)?
                .unwrap_or(Value::Null),
            other => {
                return Err(JoblyError::storage(format!(
                    "Unsupported column type {} at position {}",
                    other, index
                )));
            }
        };
        Ok(value)
    }
}

impl Executor for PgExecutor {
    async fn execute(&self, statement: &Statement) -> Result<Vec<Row>> {
        debug!(
            sql = statement.sql(),
            params = statement.params().len(),
            "executing statement"
        );

        let mut query = sqlx::query(statement.sql());
        for value in statement.params() {
            query = Self::bind_value(query, value);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            let err = JoblyError::from(e);
            if matches!(
                err,
                JoblyError::UniqueViolation(_) | JoblyError::ForeignKeyViolation(_)
            ) {
                warn!(error = %err, "constraint violation");
            }
            err
        })?;

        rows.iter().map(Self::decode_row).collect()
    }
}
