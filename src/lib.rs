//! # jobly-store
//!
//! PostgreSQL data layer for a company and job board backend.
//!
//! Statements are assembled from small fragments: a partial-update `SET`
//! builder, per-entity `WHERE` builders for search criteria, and fixed
//! statement skeletons in the repositories. Values only ever travel as
//! positional parameters; column names are validated and quoted.
//!
//! ## Features
//!
//! - **Partial updates**: sparse field maps become `"col"=$n` clauses with
//!   external names (`numEmployees`) mapped to columns (`num_employees`)
//! - **Search criteria**: optional name/title, employee range, salary and
//!   equity filters with contiguous placeholders
//! - **Natural-key uniqueness**: duplicates are detected by the database
//!   constraint at insert time
//! - **Pluggable execution**: repositories run on any [`Executor`]; the
//!   bundled [`PgExecutor`] uses an sqlx pool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jobly_store::{CompanyFilter, JoblyStore, NewCompany, StoreConfig, UpdateRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::builder("postgres://localhost/jobly").build();
//!     let store = JoblyStore::new(config).await?;
//!
//!     store
//!         .companies()
//!         .create(&NewCompany::new("c1", "C1", "Desc1").with_num_employees(1))
//!         .await?;
//!
//!     let mut updates = UpdateRequest::new();
//!     updates.insert("numEmployees".into(), 10.into());
//!     store.companies().update("c1", &updates).await?;
//!
//!     let small = store
//!         .companies()
//!         .list(&CompanyFilter::new().max_employees(50))
//!         .await?;
//!     println!("{} small companies", small.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use jobly_store::StoreConfig;
//!
//! let config = StoreConfig::builder("postgres://localhost/jobly")
//!     .companies_table("companies") // Default
//!     .jobs_table("jobs")           // Default
//!     .max_connections(5)           // Default
//!     .ensure_tables(true)          // Create tables on connect (default)
//!     .build();
//! assert!(config.validate().is_ok());
//! ```

pub mod company;
pub mod config;
pub mod error;
pub mod executor;
pub mod job;
pub mod repository;
pub mod sql;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use company::{Company, CompanyColumns, CompanyDetail, CompanyFilter, NewCompany};
pub use config::{StoreConfig, StoreConfigBuilder};
pub use error::{JoblyError, Result};
pub use executor::{Executor, PgExecutor, Row};
pub use job::{Job, JobColumns, JobFilter, NewJob};
pub use repository::{CompanyRepository, JobRepository};
pub use store::JoblyStore;
pub use types::{ColumnType, SqlValue, Statement};

// Re-export SQL utilities for advanced users
pub use sql::filter::{WhereFragment, build_company_filter, build_job_filter};
pub use sql::update::{ColumnResolver, SetFragment, UpdateRequest, build_partial_update};
pub use sql::{DdlGenerator, quote_identifier, validate_identifier};
