//! SQL utilities
//!
//! Identifier sanitization, DDL, and the `SET` / `WHERE` fragment builders.

pub mod ddl;
pub mod filter;
pub mod sanitize;
pub mod update;

pub use ddl::DdlGenerator;
pub use filter::{WhereFragment, build_company_filter, build_job_filter};
pub use sanitize::{
    POSTGRES_RESERVED_WORDS, escape_like, quote_identifier, validate_column_name,
    validate_identifier,
};
pub use update::{
    ColumnResolver, IdentityColumns, SetFragment, UpdateRequest, build_partial_update,
    ensure_updatable,
};
