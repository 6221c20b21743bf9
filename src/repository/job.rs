//! Job repository

use crate::config::StoreConfig;
use crate::error::{JoblyError, Result};
use crate::executor::Executor;
use crate::job::{Job, JobColumns, JobFilter, NewJob};
use crate::sql::filter::build_job_filter;
use crate::sql::sanitize::quote_identifier;
use crate::sql::update::{UpdateRequest, build_partial_update, ensure_updatable};
use crate::types::{SqlValue, Statement};

use super::{first_or_not_found, from_rows, inserted};

pub(crate) const JOB_COLUMNS: &str =
    r#"id, title, salary, equity, company_handle AS "companyHandle""#;

/// Job operations over an [`Executor`]
pub struct JobRepository<'a, E: Executor> {
    executor: &'a E,
    config: &'a StoreConfig,
}

impl<'a, E: Executor> JobRepository<'a, E> {
    pub fn new(executor: &'a E, config: &'a StoreConfig) -> Self {
        Self { executor, config }
    }

    fn table(&self) -> String {
        quote_identifier(&self.config.jobs_table)
    }

    /// Insert a job
    ///
    /// `(title, companyHandle)` is unique. An unknown company fails with
    /// [`JoblyError::NotFound`].
    pub async fn create(&self, job: &NewJob) -> Result<Job> {
        let sql = format!(
            "INSERT INTO {} (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            self.table(),
            JOB_COLUMNS
        );
        let params = vec![
            SqlValue::from(job.title.as_str()),
            SqlValue::from(job.salary),
            SqlValue::from(job.equity),
            SqlValue::from(job.company_handle.as_str()),
        ];

        let rows = self
            .executor
            .execute(&Statement::new(sql, params))
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    JoblyError::duplicate(format!("job: {}", job.title))
                } else if matches!(e, JoblyError::ForeignKeyViolation(_)) {
                    JoblyError::not_found(format!("No company: {}", job.company_handle))
                } else {
                    e
                }
            })?;

        inserted(rows)
    }

    /// Jobs matching `filter`, ordered by id
    pub async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let fragment = build_job_filter(filter, 0)?;
        let sql = format!(
            "SELECT {} FROM {}{} ORDER BY id",
            JOB_COLUMNS,
            self.table(),
            fragment.to_sql()
        );

        let rows = self
            .executor
            .execute(&Statement::new(sql, fragment.into_params()))
            .await?;
        from_rows(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Job> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", JOB_COLUMNS, self.table());
        let rows = self
            .executor
            .execute(&Statement::new(sql, vec![SqlValue::from(id)]))
            .await?;
        first_or_not_found(rows, format!("No job: {}", id))
    }

    /// Apply a partial update; `id` and `companyHandle` are fixed
    ///
    /// Renaming to a title the company already uses fails with
    /// [`JoblyError::Duplicate`].
    pub async fn update(&self, id: i32, updates: &UpdateRequest) -> Result<Job> {
        ensure_updatable(updates, JobColumns::UPDATABLE)?;
        let set = build_partial_update(updates, &JobColumns)?;

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ${} RETURNING {}",
            self.table(),
            set.to_sql(),
            set.next_placeholder(),
            JOB_COLUMNS
        );
        let mut params = set.into_params();
        params.push(SqlValue::from(id));

        let rows = self
            .executor
            .execute(&Statement::new(sql, params))
            .await
            .map_err(|e| {
                if !e.is_unique_violation() {
                    return e;
                }
                match updates.get("title").and_then(|t| t.as_str()) {
                    Some(title) => JoblyError::duplicate(format!("job: {}", title)),
                    None => JoblyError::duplicate(format!("job: {}", id)),
                }
            })?;
        first_or_not_found(rows, format!("No job: {}", id))
    }

    pub async fn remove(&self, id: i32) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING id", self.table());
        let rows = self
            .executor
            .execute(&Statement::new(sql, vec![SqlValue::from(id)]))
            .await?;

        if rows.is_empty() {
            return Err(JoblyError::not_found(format!("No job: {}", id)));
        }
        Ok(())
    }
}
