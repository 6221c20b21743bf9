//! Job records, requests and column mapping

use serde::{Deserialize, Deserializer, Serialize};

use crate::company::parse_integer;
use crate::error::{JoblyError, Result};
use crate::sql::update::ColumnResolver;
use crate::types::ColumnType;

/// A job as returned to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<f64>,
    pub company_handle: String,
}

/// Request to create a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i32>,
    #[serde(default)]
    pub equity: Option<f64>,
    pub company_handle: String,
}

impl NewJob {
    pub fn new(title: impl Into<String>, company_handle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            salary: None,
            equity: None,
            company_handle: company_handle.into(),
        }
    }

    pub fn with_salary(mut self, salary: i32) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_equity(mut self, equity: f64) -> Self {
        self.equity = Some(equity);
        self
    }
}

/// Optional job search criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    /// Case-insensitive partial match on title
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub min_salary: Option<i64>,
    /// Only `Some(true)` restricts results; anything that is not a boolean is
    /// read as "not given"
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_equity: Option<bool>,
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn min_salary(mut self, min: i64) -> Self {
        self.min_salary = Some(min);
        self
    }

    pub fn has_equity(mut self, has_equity: bool) -> Self {
        self.has_equity = Some(has_equity);
        self
    }

    /// Parse query-string pairs (`title`, `minSalary`, `hasEquity`)
    ///
    /// `hasEquity` only recognises `true` and `false`; other values are ignored.
    pub fn from_query<'q, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'q str, &'q str)>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            match key {
                "title" => filter.title = Some(value.to_string()),
                "minSalary" => filter.min_salary = Some(parse_integer(key, value)?),
                "hasEquity" => filter.has_equity = value.trim().parse::<bool>().ok(),
                other => {
                    return Err(JoblyError::validation(format!(
                        "Unknown job filter '{}'",
                        other
                    )));
                }
            }
        }
        Ok(filter)
    }
}

/// Field → column mapping for the jobs table
#[derive(Debug, Clone, Copy, Default)]
pub struct JobColumns;

impl JobColumns {
    /// Fields a partial update may touch; `id` and `companyHandle` are fixed
    pub const UPDATABLE: &'static [&'static str] = &["title", "salary", "equity"];
}

impl ColumnResolver for JobColumns {
    fn column<'a>(&'a self, field: &'a str) -> &'a str {
        field
    }

    fn column_type(&self, field: &str) -> ColumnType {
        match field {
            "salary" => ColumnType::Integer,
            "equity" => ColumnType::Numeric,
            _ => ColumnType::Text,
        }
    }
}
