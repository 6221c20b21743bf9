//! Configuration for the store
//!
//! Provides a builder pattern for configuring the connection and table names.

use crate::error::{JoblyError, Result};
use crate::sql::sanitize::validate_identifier;

/// Configuration for the store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// PostgreSQL database URL
    pub database_url: String,
    /// Name of the companies table (default: "companies")
    pub companies_table: String,
    /// Name of the jobs table (default: "jobs")
    pub jobs_table: String,
    /// Maximum pooled connections (default: 5)
    pub max_connections: u32,
    /// Create missing tables on connect (default: true)
    pub ensure_tables: bool,
}

impl StoreConfig {
    /// Create a new configuration builder
    pub fn builder(database_url: impl Into<String>) -> StoreConfigBuilder {
        StoreConfigBuilder::new(database_url)
    }

    /// Build a configuration from `DATABASE_URL` and optional `JOBLY_MAX_CONNECTIONS`
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| JoblyError::Connection("DATABASE_URL is not set".into()))?;

        let mut builder = Self::builder(database_url);
        if let Ok(raw) = std::env::var("JOBLY_MAX_CONNECTIONS") {
            let max = raw.parse::<u32>().map_err(|_| {
                JoblyError::validation(format!(
                    "JOBLY_MAX_CONNECTIONS must be a positive integer, got '{}'",
                    raw
                ))
            })?;
            builder = builder.max_connections(max);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Check table names and pool size
    pub fn validate(&self) -> Result<()> {
        validate_identifier(&self.companies_table)?;
        validate_identifier(&self.jobs_table)?;
        if self.companies_table == self.jobs_table {
            return Err(JoblyError::validation(
                "Companies and jobs tables must have different names",
            ));
        }
        if self.max_connections == 0 {
            return Err(JoblyError::validation("max_connections must be at least 1"));
        }
        Ok(())
    }
}

/// Builder for StoreConfig
#[derive(Debug)]
pub struct StoreConfigBuilder {
    database_url: String,
    companies_table: String,
    jobs_table: String,
    max_connections: u32,
    ensure_tables: bool,
}

impl StoreConfigBuilder {
    /// Create a new builder with the database URL
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            companies_table: "companies".to_string(),
            jobs_table: "jobs".to_string(),
            max_connections: 5,
            ensure_tables: true,
        }
    }

    pub fn companies_table(mut self, name: impl Into<String>) -> Self {
        self.companies_table = name.into();
        self
    }

    pub fn jobs_table(mut self, name: impl Into<String>) -> Self {
        self.jobs_table = name.into();
        self
    }

    /// Prefix both table names, e.g. `test_ab12` gives `test_ab12_companies`
    pub fn table_prefix(mut self, prefix: &str) -> Self {
        self.companies_table = format!("{}_companies", prefix);
        self.jobs_table = format!("{}_jobs", prefix);
        self
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Enable or disable table creation on connect (default: true)
    pub fn ensure_tables(mut self, enabled: bool) -> Self {
        self.ensure_tables = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> StoreConfig {
        StoreConfig {
            database_url: self.database_url,
            companies_table: self.companies_table,
            jobs_table: self.jobs_table,
            max_connections: self.max_connections,
            ensure_tables: self.ensure_tables,
        }
    }
}
