//! Request types for the record store API.
//!
//! Create and update bodies deserialize straight into
//! [`NewEmployee`](crate::models::NewEmployee) and
//! [`EmployeePatch`](crate::models::EmployeePatch); this module holds the
//! query-string parameters.

use serde::{Deserialize, Serialize};

use crate::error::RecordResult;
use crate::query::SearchField;

/// Query parameters for `GET /employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text search; empty or absent lists everything.
    #[serde(default)]
    pub q: String,
    /// Field to search; absent or empty means `name`.
    #[serde(default)]
    pub field: Option<String>,
}

impl SearchParams {
    /// Resolves the requested search field.
    pub fn search_field(&self) -> RecordResult<SearchField> {
        match self.field.as_deref().map(str::trim) {
            None | Some("") => Ok(SearchField::default()),
            Some(name) => name.parse(),
        }
    }
}

/// Query parameters for `DELETE /employees/:id`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DeleteParams {
    /// The caller's answer to the delete confirmation prompt.
    #[serde(default)]
    pub confirm: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_field_defaults_to_name() {
        let params = SearchParams::default();
        assert_eq!(params.search_field().unwrap(), SearchField::Name);

        let blank = SearchParams {
            q: "x".to_string(),
            field: Some(" ".to_string()),
        };
        assert_eq!(blank.search_field().unwrap(), SearchField::Name);
    }

    #[test]
    fn test_search_field_parses_known_names() {
        let params = SearchParams {
            q: "dev".to_string(),
            field: Some("role".to_string()),
        };
        assert_eq!(params.search_field().unwrap(), SearchField::Role);
    }

    #[test]
    fn test_search_field_rejects_unknown_name() {
        let params = SearchParams {
            q: String::new(),
            field: Some("salary".to_string()),
        };
        assert!(params.search_field().is_err());
    }

    #[test]
    fn test_delete_params_default_is_unconfirmed() {
        let params: DeleteParams = serde_json::from_str("{}").unwrap();
        assert!(!params.confirm);
    }
}
