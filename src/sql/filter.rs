//! Search-criteria `WHERE` clause building
//!
//! Each entity has a fixed set of optional criteria. Present criteria become
//! predicates in a fixed order, joined by `AND`; placeholders continue from the
//! number of parameters the surrounding statement already allocated.

use crate::company::CompanyFilter;
use crate::error::{JoblyError, Result};
use crate::job::JobFilter;
use crate::sql::sanitize::{escape_like, quote_identifier};
use crate::types::SqlValue;

/// `WHERE` clause fragment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereFragment {
    predicates: Vec<String>,
    params: Vec<SqlValue>,
}

impl WhereFragment {
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    pub fn into_params(self) -> Vec<SqlValue> {
        self.params
    }

    /// `" WHERE a AND b"`, or an empty string when there are no predicates
    pub fn to_sql(&self) -> String {
        if self.predicates.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.predicates.join(" AND "))
        }
    }
}

/// Accumulates predicates and their parameters
///
/// Consumed and returned by each step so the placeholder counter never escapes.
struct PredicateList {
    offset: usize,
    predicates: Vec<String>,
    params: Vec<SqlValue>,
}

impl PredicateList {
    fn starting_after(offset: usize) -> Self {
        Self {
            offset,
            predicates: Vec::new(),
            params: Vec::new(),
        }
    }

    /// `"<column>" <op> $n` with `value` bound at `$n`
    fn compare(mut self, column: &str, op: &str, value: SqlValue) -> Self {
        self.params.push(value);
        let placeholder = self.offset + self.params.len();
        let column = quote_identifier(column);
        self.predicates
            .push(format!("{} {} ${}", column, op, placeholder));
        self
    }

    /// Case-insensitive substring match
    fn contains(self, column: &str, needle: &str) -> Self {
        let pattern = format!("%{}%", escape_like(needle));
        self.compare(column, "ILIKE", SqlValue::Text(pattern))
    }

    /// Predicate without parameters
    fn constant(mut self, predicate: String) -> Self {
        self.predicates.push(predicate);
        self
    }

    fn finish(self) -> WhereFragment {
        WhereFragment {
            predicates: self.predicates,
            params: self.params,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Build the `WHERE` fragment for a company search
///
/// Order: name → minimum employees → maximum employees. When both bounds are
/// given and the minimum exceeds the maximum the search fails with
/// [`JoblyError::InvalidRange`] before any predicate is built.
pub fn build_company_filter(filter: &CompanyFilter, offset: usize) -> Result<WhereFragment> {
    if let (Some(min), Some(max)) = (filter.min_employees, filter.max_employees) {
        if min > max {
            return Err(JoblyError::InvalidRange { min, max });
        }
    }

    let mut list = PredicateList::starting_after(offset);

    if let Some(name) = non_empty(filter.name.as_deref()) {
        list = list.contains("name", name);
    }
    if let Some(min) = filter.min_employees {
        list = list.compare("num_employees", ">=", SqlValue::Int(min));
    }
    if let Some(max) = filter.max_employees {
        list = list.compare("num_employees", "<=", SqlValue::Int(max));
    }

    Ok(list.finish())
}

/// Build the `WHERE` fragment for a job search
///
/// Order: title → minimum salary → has equity. The equity predicate is only
/// added when `has_equity` is exactly `Some(true)`.
pub fn build_job_filter(filter: &JobFilter, offset: usize) -> Result<WhereFragment> {
    let mut list = PredicateList::starting_after(offset);

    if let Some(title) = non_empty(filter.title.as_deref()) {
        list = list.contains("title", title);
    }
    if let Some(min) = filter.min_salary {
        list = list.compare("salary", ">=", SqlValue::Int(min));
    }
    if filter.has_equity == Some(true) {
        list = list.constant(format!("{} > 0", quote_identifier("equity")));
    }

    Ok(list.finish())
}
