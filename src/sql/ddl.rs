//! DDL generation for the companies and jobs tables
//!
//! The natural keys are enforced here: `handle` is the companies primary key and
//! jobs carry `UNIQUE (title, company_handle)`. Inserts rely on these constraints
//! to detect duplicates.

use crate::config::StoreConfig;
use crate::sql::sanitize::quote_identifier;
use crate::types::ColumnType;

/// DDL generator bound to the configured table names
pub struct DdlGenerator<'a> {
    config: &'a StoreConfig,
}

impl<'a> DdlGenerator<'a> {
    pub fn new(config: &'a StoreConfig) -> Self {
        Self { config }
    }

    /// `CREATE TABLE IF NOT EXISTS` for companies
    pub fn generate_create_companies(&self) -> String {
        let columns = [
            "handle VARCHAR(25) PRIMARY KEY".to_string(),
            column("name", ColumnType::Text, "NOT NULL"),
            column("description", ColumnType::Text, "NOT NULL"),
            column(
                "num_employees",
                ColumnType::Integer,
                "CHECK (num_employees >= 0)",
            ),
            column("logo_url", ColumnType::Text, ""),
        ];

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            quote_identifier(&self.config.companies_table),
            columns.join(", ")
        )
    }

    /// `CREATE TABLE IF NOT EXISTS` for jobs, referencing companies
    pub fn generate_create_jobs(&self) -> String {
        let columns = [
            "id SERIAL PRIMARY KEY".to_string(),
            column("title", ColumnType::Text, "NOT NULL"),
            column("salary", ColumnType::Integer, "CHECK (salary >= 0)"),
            column("equity", ColumnType::Numeric, "CHECK (equity <= 1.0)"),
            format!(
                "company_handle VARCHAR(25) NOT NULL REFERENCES {}(handle) ON DELETE CASCADE",
                quote_identifier(&self.config.companies_table)
            ),
            "UNIQUE (title, company_handle)".to_string(),
        ];

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            quote_identifier(&self.config.jobs_table),
            columns.join(", ")
        )
    }

    /// Index backing the company detail lookup of jobs
    pub fn generate_jobs_company_index(&self) -> String {
        let index_name = format!("idx_{}_company_handle", self.config.jobs_table);
        format!(
            "CREATE INDEX IF NOT EXISTS {} ON {}(company_handle)",
            quote_identifier(&index_name),
            quote_identifier(&self.config.jobs_table)
        )
    }

    /// All bootstrap statements, in execution order
    pub fn generate_all(&self) -> Vec<String> {
        vec![
            self.generate_create_companies(),
            self.generate_create_jobs(),
            self.generate_jobs_company_index(),
        ]
    }

    /// `DROP TABLE` for both tables, jobs first
    pub fn generate_drop_tables(&self) -> Vec<String> {
        [&self.config.jobs_table, &self.config.companies_table]
            .into_iter()
            .map(|table| {
                format!(
                    "DROP TABLE IF EXISTS {} CASCADE",
                    quote_identifier(table)
                )
            })
            .collect()
    }
}

fn column(name: &str, column_type: ColumnType, constraints: &str) -> String {
    let mut definition = format!("{} {}", name, column_type.to_sql_type());
    if !constraints.is_empty() {
        definition.push(' ');
        definition.push_str(constraints);
    }
    definition
}
