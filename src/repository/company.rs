//! Company repository

use crate::company::{Company, CompanyColumns, CompanyDetail, CompanyFilter, NewCompany};
use crate::config::StoreConfig;
use crate::error::{JoblyError, Result};
use crate::executor::Executor;
use crate::job::Job;
use crate::sql::filter::build_company_filter;
use crate::sql::sanitize::quote_identifier;
use crate::sql::update::{UpdateRequest, build_partial_update, ensure_updatable};
use crate::types::{SqlValue, Statement};

use super::job::JOB_COLUMNS;
use super::{first_or_not_found, from_rows, inserted};

/// Output columns, aliased to the record's field names
const COMPANY_COLUMNS: &str =
    r#"handle, name, description, num_employees AS "numEmployees", logo_url AS "logoUrl""#;

/// Company operations over an [`Executor`]
pub struct CompanyRepository<'a, E: Executor> {
    executor: &'a E,
    config: &'a StoreConfig,
}

impl<'a, E: Executor> CompanyRepository<'a, E> {
    pub fn new(executor: &'a E, config: &'a StoreConfig) -> Self {
        Self { executor, config }
    }

    fn table(&self) -> String {
        quote_identifier(&self.config.companies_table)
    }

    /// Insert a company
    ///
    /// The handle is the primary key; inserting an existing handle fails with
    /// [`JoblyError::Duplicate`].
    pub async fn create(&self, company: &NewCompany) -> Result<Company> {
        let sql = format!(
            "INSERT INTO {} (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            self.table(),
            COMPANY_COLUMNS
        );
        let params = vec![
            SqlValue::from(company.handle.as_str()),
            SqlValue::from(company.name.as_str()),
            SqlValue::from(company.description.as_str()),
            SqlValue::from(company.num_employees),
            SqlValue::from(company.logo_url.clone()),
        ];

        let rows = self
            .executor
            .execute(&Statement::new(sql, params))
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    JoblyError::duplicate(format!("company: {}", company.handle))
                } else {
                    e
                }
            })?;

        inserted(rows)
    }

    /// Companies matching `filter`, ordered by name
    pub async fn list(&self, filter: &CompanyFilter) -> Result<Vec<Company>> {
        let fragment = build_company_filter(filter, 0)?;
        let sql = format!(
            "SELECT {} FROM {}{} ORDER BY name",
            COMPANY_COLUMNS,
            self.table(),
            fragment.to_sql()
        );

        let rows = self
            .executor
            .execute(&Statement::new(sql, fragment.into_params()))
            .await?;
        from_rows(rows)
    }

    /// A company with its jobs (ordered by id)
    pub async fn get(&self, handle: &str) -> Result<CompanyDetail> {
        let sql = format!(
            "SELECT {} FROM {} WHERE handle = $1",
            COMPANY_COLUMNS,
            self.table()
        );
        let rows = self
            .executor
            .execute(&Statement::new(sql, vec![SqlValue::from(handle)]))
            .await?;
        let company: Company = first_or_not_found(rows, format!("No company: {}", handle))?;

        let sql = format!(
            "SELECT {} FROM {} WHERE company_handle = $1 ORDER BY id",
            JOB_COLUMNS,
            quote_identifier(&self.config.jobs_table)
        );
        let rows = self
            .executor
            .execute(&Statement::new(sql, vec![SqlValue::from(handle)]))
            .await?;
        let jobs: Vec<Job> = from_rows(rows)?;

        Ok(CompanyDetail { company, jobs })
    }

    /// Apply a partial update
    ///
    /// Only `name`, `description`, `numEmployees` and `logoUrl` may be changed.
    pub async fn update(&self, handle: &str, updates: &UpdateRequest) -> Result<Company> {
        ensure_updatable(updates, CompanyColumns::UPDATABLE)?;
        let set = build_partial_update(updates, &CompanyColumns)?;

        let sql = format!(
            "UPDATE {} SET {} WHERE handle = ${} RETURNING {}",
            self.table(),
            set.to_sql(),
            set.next_placeholder(),
            COMPANY_COLUMNS
        );
        let mut params = set.into_params();
        params.push(SqlValue::from(handle));

        let rows = self.executor.execute(&Statement::new(sql, params)).await?;
        first_or_not_found(rows, format!("No company: {}", handle))
    }

    /// Delete a company; its jobs go with it
    pub async fn remove(&self, handle: &str) -> Result<()> {
        let sql = format!(
            "DELETE FROM {} WHERE handle = $1 RETURNING handle",
            self.table()
        );
        let rows = self
            .executor
            .execute(&Statement::new(sql, vec![SqlValue::from(handle)]))
            .await?;

        if rows.is_empty() {
            return Err(JoblyError::not_found(format!("No company: {}", handle)));
        }
        Ok(())
    }
}
