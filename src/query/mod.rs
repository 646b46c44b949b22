//! Search over the record list.
//!
//! [`filter`] builds a [`Projection`]: a read-only, order-preserving view
//! of the records whose selected field contains the query text,
//! compared case-insensitively. Nothing is copied or cached; each call to
//! [`Projection::iter`] walks the records again.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;
use crate::models::EmployeeRecord;

/// The record attribute a search compares against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// Match on name.
    #[default]
    Name,
    /// Match on email.
    Email,
    /// Match on phone.
    Phone,
    /// Match on role.
    Role,
    /// Match on address.
    Address,
    /// Match on currency code.
    Currency,
}

impl SearchField {
    /// Every searchable field, in display order.
    pub const ALL: [SearchField; 6] = [
        SearchField::Name,
        SearchField::Email,
        SearchField::Phone,
        SearchField::Role,
        SearchField::Address,
        SearchField::Currency,
    ];

    /// Returns the field's name as used in queries and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Email => "email",
            SearchField::Phone => "phone",
            SearchField::Role => "role",
            SearchField::Address => "address",
            SearchField::Currency => "currency",
        }
    }

    /// Returns this field's value on `record`.
    pub fn value_of(self, record: &EmployeeRecord) -> &str {
        match self {
            SearchField::Name => &record.name,
            SearchField::Email => &record.email,
            SearchField::Phone => &record.phone,
            SearchField::Role => &record.role,
            SearchField::Address => &record.address,
            SearchField::Currency => &record.currency,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecordError::Validation {
                field: "field".to_string(),
                message: format!("unknown search field '{}'", s),
            })
    }
}

/// A filtered, borrowed view over a record slice.
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    records: &'a [EmployeeRecord],
    needle: String,
    field: SearchField,
}

impl<'a> Projection<'a> {
    /// Iterates the matching records in store order.
    pub fn iter(&self) -> impl Iterator<Item = &'a EmployeeRecord> + Clone + '_ {
        let needle = self.needle.as_str();
        let field = self.field;
        self.records
            .iter()
            .filter(move |record| matches(record, field, needle))
    }

    /// Returns true when the query is empty and every record is included.
    pub fn is_identity(&self) -> bool {
        self.needle.is_empty()
    }

    /// Counts matching records.
    pub fn count(&self) -> usize {
        if self.is_identity() {
            self.records.len()
        } else {
            self.iter().count()
        }
    }

    /// Collects the matches into owned records.
    pub fn to_records(&self) -> Vec<EmployeeRecord> {
        self.iter().cloned().collect()
    }
}

impl<'a, 'p> IntoIterator for &'p Projection<'a> {
    type Item = &'a EmployeeRecord;
    type IntoIter = Box<dyn Iterator<Item = &'a EmployeeRecord> + 'p>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn matches(record: &EmployeeRecord, field: SearchField, needle: &str) -> bool {
    needle.is_empty() || field.value_of(record).to_lowercase().contains(needle)
}

/// Filters `records` by a case-insensitive substring match on `field`.
///
/// The query is trimmed first; an empty query yields every record.
///
/// # Examples
///
/// ```
/// use employee_records::models::EmployeeRecord;
/// use employee_records::query::{SearchField, filter};
///
/// let record = |id: &str, role: &str| EmployeeRecord {
///     id: id.to_string(),
///     name: "N".to_string(),
///     email: "e@x".to_string(),
///     phone: "1".to_string(),
///     role: role.to_string(),
///     address: String::new(),
///     salary: String::new(),
///     currency: "PKR".to_string(),
/// };
/// let records = vec![record("a", "Manager"), record("b", "Developer"), record("c", "Designer")];
///
/// let devs: Vec<_> = filter(&records, "dev", SearchField::Role).iter().collect();
/// assert_eq!(devs.len(), 1);
/// assert_eq!(devs[0].id, "b");
/// ```
pub fn filter<'a>(records: &'a [EmployeeRecord], query: &str, field: SearchField) -> Projection<'a> {
    Projection {
        records,
        needle: query.trim().to_lowercase(),
        field,
    }
}

/// Returns the record-count label shown above a list, e.g. `"3 records"`.
pub fn summary(count: usize) -> String {
    format!("{} record{}", count, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_record(id: &str, name: &str, role: &str, currency: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            phone: "+92 300 0000000".to_string(),
            role: role.to_string(),
            address: String::new(),
            salary: String::new(),
            currency: currency.to_string(),
        }
    }

    fn sample_records() -> Vec<EmployeeRecord> {
        vec![
            create_record("a", "Ayesha Khan", "Manager", "PKR"),
            create_record("b", "Bilal Ahmed", "Developer", "USD"),
            create_record("c", "Sara Ali", "Designer", "USD"),
        ]
    }

    fn ids(projection: &Projection<'_>) -> Vec<String> {
        projection.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity_for_every_field() {
        let records = sample_records();
        for field in SearchField::ALL {
            let projection = filter(&records, "", field);
            assert!(projection.is_identity());
            assert_eq!(projection.to_records(), records);
        }
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let records = sample_records();
        assert_eq!(filter(&records, "   ", SearchField::Name).count(), 3);
    }

    #[test]
    fn test_role_substring_case_insensitive() {
        let records = sample_records();
        assert_eq!(ids(&filter(&records, "dev", SearchField::Role)), vec!["b"]);
        assert_eq!(ids(&filter(&records, "DES", SearchField::Role)), vec!["c"]);
    }

    #[test]
    fn test_preserves_store_order() {
        let records = sample_records();
        assert_eq!(ids(&filter(&records, "a", SearchField::Name)), vec!["a", "b", "c"]);
        assert_eq!(ids(&filter(&records, "usd", SearchField::Currency)), vec!["b", "c"]);
    }

    #[test]
    fn test_only_selected_field_is_compared() {
        let records = sample_records();
        assert_eq!(filter(&records, "manager", SearchField::Name).count(), 0);
        assert_eq!(filter(&records, "manager", SearchField::Role).count(), 1);
    }

    #[test]
    fn test_query_is_trimmed() {
        let records = sample_records();
        assert_eq!(ids(&filter(&records, "  sara ", SearchField::Name)), vec!["c"]);
    }

    #[test]
    fn test_empty_field_value_matches_nothing() {
        let records = sample_records();
        assert_eq!(filter(&records, "karachi", SearchField::Address).count(), 0);
    }

    #[test]
    fn test_projection_is_restartable() {
        let records = sample_records();
        let projection = filter(&records, "d", SearchField::Role);
        let first: Vec<_> = projection.iter().collect();
        let second: Vec<_> = (&projection).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_search_field_from_str() {
        assert_eq!("role".parse::<SearchField>().unwrap(), SearchField::Role);
        assert_eq!(" Email ".parse::<SearchField>().unwrap(), SearchField::Email);
        assert!("salary".parse::<SearchField>().is_err());
    }

    #[test]
    fn test_search_field_serde_names() {
        assert_eq!(
            serde_json::to_string(&SearchField::Currency).unwrap(),
            "\"currency\""
        );
        let field: SearchField = serde_json::from_str("\"address\"").unwrap();
        assert_eq!(field, SearchField::Address);
        assert_eq!(SearchField::default(), SearchField::Name);
    }

    #[test]
    fn test_summary_pluralizes() {
        assert_eq!(summary(0), "0 records");
        assert_eq!(summary(1), "1 record");
        assert_eq!(summary(3), "3 records");
    }
}
