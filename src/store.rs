//! JoblyStore - entry point over a PostgreSQL pool

use sqlx::PgPool;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::executor::PgExecutor;
use crate::repository::{CompanyRepository, JobRepository};

/// Companies and jobs stored in PostgreSQL
///
/// Owns the connection pool and hands out repositories borrowing it.
pub struct JoblyStore {
    executor: PgExecutor,
    config: StoreConfig,
}

impl JoblyStore {
    /// Connect and, unless disabled, create the tables
    pub async fn new(config: StoreConfig) -> Result<Self> {
        let executor = PgExecutor::new(&config).await?;
        Ok(Self { executor, config })
    }

    /// Use an existing pool
    ///
    /// Tables are created when `config.ensure_tables` is set.
    pub async fn from_pool(pool: PgPool, config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let executor = PgExecutor::from_pool(pool);
        if config.ensure_tables {
            executor.ensure_tables(&config).await?;
        }
        Ok(Self { executor, config })
    }

    pub fn companies(&self) -> CompanyRepository<'_, PgExecutor> {
        CompanyRepository::new(&self.executor, &self.config)
    }

    pub fn jobs(&self) -> JobRepository<'_, PgExecutor> {
        JobRepository::new(&self.executor, &self.config)
    }

    pub fn executor(&self) -> &PgExecutor {
        &self.executor
    }

    pub fn pool(&self) -> &PgPool {
        self.executor.pool()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Drop both tables
    pub async fn drop_tables(&self) -> Result<()> {
        self.executor.drop_tables(&self.config).await
    }
}
