//! Company records, requests and column mapping

use serde::{Deserialize, Serialize};

use crate::error::{JoblyError, Result};
use crate::job::Job;
use crate::sql::update::ColumnResolver;
use crate::types::ColumnType;

/// A company as returned to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// A company together with its jobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}

/// Request to create a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub num_employees: Option<i32>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl NewCompany {
    pub fn new(
        handle: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            handle: handle.into(),
            name: name.into(),
            description: description.into(),
            num_employees: None,
            logo_url: None,
        }
    }

    pub fn with_num_employees(mut self, num_employees: i32) -> Self {
        self.num_employees = Some(num_employees);
        self
    }

    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }
}

/// Optional company search criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyFilter {
    /// Case-insensitive partial match on name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub min_employees: Option<i64>,
    #[serde(default)]
    pub max_employees: Option<i64>,
}

impl CompanyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn min_employees(mut self, min: i64) -> Self {
        self.min_employees = Some(min);
        self
    }

    pub fn max_employees(mut self, max: i64) -> Self {
        self.max_employees = Some(max);
        self
    }

    /// Parse query-string pairs (`name`, `minEmployees`, `maxEmployees`)
    ///
    /// Numeric values are parsed here; unknown keys and unparsable numbers are
    /// rejected with [`JoblyError::Validation`].
    pub fn from_query<'q, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'q str, &'q str)>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            match key {
                "name" => filter.name = Some(value.to_string()),
                "minEmployees" => filter.min_employees = Some(parse_integer(key, value)?),
                "maxEmployees" => filter.max_employees = Some(parse_integer(key, value)?),
                other => {
                    return Err(JoblyError::validation(format!(
                        "Unknown company filter '{}'",
                        other
                    )));
                }
            }
        }
        Ok(filter)
    }
}

pub(crate) fn parse_integer(key: &str, value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        JoblyError::validation(format!("'{}' must be an integer, got '{}'", key, value))
    })
}

/// Field → column mapping for the companies table
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyColumns;

impl CompanyColumns {
    /// Fields a partial update may touch; `handle` is the key and never updatable
    pub const UPDATABLE: &'static [&'static str] =
        &["name", "description", "numEmployees", "logoUrl"];
}

impl ColumnResolver for CompanyColumns {
    fn column<'a>(&'a self, field: &'a str) -> &'a str {
        match field {
            "numEmployees" => "num_employees",
            "logoUrl" => "logo_url",
            other => other,
        }
    }

    fn column_type(&self, field: &str) -> ColumnType {
        match field {
            "numEmployees" => ColumnType::Integer,
            _ => ColumnType::Text,
        }
    }
}
