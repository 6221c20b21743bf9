//! Identifier quoting and validation
//!
//! Column and table names are the only caller-influenced text that reaches SQL;
//! everything else travels as a bound parameter.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{JoblyError, Result};

/// PostgreSQL reserved keywords that cannot be used as unquoted identifiers
pub const POSTGRES_RESERVED_WORDS: &[&str] = &[
    "ALL", "ANALYSE", "ANALYZE", "AND", "ANY", "ARRAY", "AS", "ASC", "ASYMMETRIC", "BOTH",
    "CASE", "CAST", "CHECK", "COLLATE", "COLUMN", "CONSTRAINT", "CREATE", "CURRENT_CATALOG",
    "CURRENT_DATE", "CURRENT_ROLE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "DEFAULT", "DEFERRABLE", "DESC", "DISTINCT", "DO", "ELSE", "END", "EXCEPT", "FALSE",
    "FETCH", "FOR", "FOREIGN", "FROM", "GRANT", "GROUP", "HAVING", "IN", "INITIALLY",
    "INTERSECT", "INTO", "LATERAL", "LEADING", "LIMIT", "LOCALTIME", "LOCALTIMESTAMP", "NOT",
    "NULL", "OFFSET", "ON", "ONLY", "OR", "ORDER", "PLACING", "PRIMARY", "REFERENCES",
    "RETURNING", "SELECT", "SESSION_USER", "SOME", "SYMMETRIC", "TABLE", "THEN", "TO",
    "TRAILING", "TRUE", "UNION", "UNIQUE", "USER", "USING", "VARIADIC", "WHEN", "WHERE",
    "WINDOW", "WITH",
];

static TABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid table name pattern")
});

static COLUMN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid column name pattern")
});

/// Quote a SQL identifier
///
/// Wraps the identifier in double quotes and doubles any embedded quote.
///
/// # Example
/// ```
/// use jobly_store::sql::quote_identifier;
///
/// assert_eq!(quote_identifier("num_employees"), "\"num_employees\"");
/// ```
pub fn quote_identifier(identifier: &str) -> String {
    let escaped = identifier.replace('"', "\"\"");
    format!("\"{}\"", escaped)
}

/// Validate a table name taken from configuration
///
/// Must start with a lowercase letter, contain only lowercase letters, digits
/// and underscores, and not be a reserved keyword.
///
/// ```
/// use jobly_store::sql::validate_identifier;
///
/// assert!(validate_identifier("companies").is_ok());
/// assert!(validate_identifier("select").is_err());
/// ```
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(JoblyError::validation("Identifier cannot be empty"));
    }

    if !TABLE_NAME.is_match(name) {
        return Err(JoblyError::validation(format!(
            "Identifier '{}' is invalid. Must start with a lowercase letter \
             and contain only lowercase letters, numbers, and underscores.",
            name
        )));
    }

    if POSTGRES_RESERVED_WORDS.contains(&name.to_uppercase().as_str()) {
        return Err(JoblyError::validation(format!(
            "Identifier '{}' is a PostgreSQL reserved keyword and cannot be used.",
            name
        )));
    }

    Ok(())
}

/// Validate a resolved column name before it is quoted into a statement
///
/// Reserved words are fine here since columns are always quoted.
pub fn validate_column_name(name: &str) -> Result<()> {
    if COLUMN_NAME.is_match(name) {
        Ok(())
    } else {
        Err(JoblyError::validation(format!(
            "Column name '{}' is not a plain identifier",
            name
        )))
    }
}

/// Escape `%`, `_` and `\` so a user string matches literally inside a LIKE pattern
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("handle"), "\"handle\"");
        assert_eq!(quote_identifier("logo_url"), "\"logo_url\"");
        assert_eq!(quote_identifier("select"), "\"select\"");
    }

    #[test]
    fn test_quote_identifier_doubles_quotes() {
        assert_eq!(
            quote_identifier("name\"; DROP TABLE companies; --"),
            "\"name\"\"; DROP TABLE companies; --\""
        );
    }

    #[test]
    fn test_validate_identifier_accepts_table_names() {
        assert!(validate_identifier("companies").is_ok());
        assert!(validate_identifier("jobs").is_ok());
        assert!(validate_identifier("test_ab12cd34_jobs").is_ok());
    }

    #[test]
    fn test_validate_identifier_rejects_bad_names() {
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("1jobs").is_err());
        assert!(validate_identifier("Jobs").is_err());
        assert!(validate_identifier("my-table").is_err());
        assert!(validate_identifier("jobs; DROP").is_err());
    }

    #[test]
    fn test_validate_identifier_rejects_reserved() {
        let err = validate_identifier("user").unwrap_err();
        assert!(err.to_string().contains("reserved keyword"));
        assert!(validate_identifier("table").is_err());
        assert!(validate_identifier("order").is_err());
    }

    #[test]
    fn test_validate_column_name() {
        assert!(validate_column_name("num_employees").is_ok());
        assert!(validate_column_name("firstName").is_ok());
        assert!(validate_column_name("_private").is_ok());
        assert!(validate_column_name("order").is_ok());

        assert!(validate_column_name("").is_err());
        assert!(validate_column_name("9lives").is_err());
        assert!(validate_column_name("name\"=$1, \"handle").is_err());
        assert!(validate_column_name("title = 'x' --").is_err());
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("net"), "net");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_reserved_words_list() {
        assert!(POSTGRES_RESERVED_WORDS.contains(&"SELECT"));
        assert!(POSTGRES_RESERVED_WORDS.contains(&"WHERE"));
        assert!(POSTGRES_RESERVED_WORDS.len() > 50);
    }
}
