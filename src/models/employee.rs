//! Employee record model and the inputs that create or change it.
//!
//! This module defines the stored [`EmployeeRecord`] alongside
//! [`NewEmployee`] (create input) and [`EmployeePatch`] (update input).

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

use super::salary::{format_salary, normalize_salary};

/// Represents one employee as held by the record store and persisted to storage.
///
/// Every field is a string, matching the persisted JSON layout
/// `{id, name, email, phone, role, address, salary, currency}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Opaque unique identifier, assigned at creation and never changed.
    pub id: String,
    /// Full name (required).
    #[serde(default)]
    pub name: String,
    /// Email address (required).
    #[serde(default)]
    pub email: String,
    /// Phone number (required).
    #[serde(default)]
    pub phone: String,
    /// Job role, e.g. "Manager" (required).
    #[serde(default)]
    pub role: String,
    /// Postal address (optional).
    #[serde(default)]
    pub address: String,
    /// Salary with two fraction digits, or empty when unset.
    #[serde(default)]
    pub salary: String,
    /// Currency code for the salary, e.g. "PKR".
    #[serde(default)]
    pub currency: String,
}

impl EmployeeRecord {
    /// Checks that name, email, phone and role are all non-empty.
    ///
    /// The first empty field is reported.
    pub fn validate(&self) -> RecordResult<()> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("role", &self.role),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(RecordError::required(field)),
            None => Ok(()),
        }
    }

    /// Returns the salary formatted for display, e.g. `"2,000 USD"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_records::models::EmployeeRecord;
    ///
    /// let record = EmployeeRecord {
    ///     id: "id_1".to_string(),
    ///     name: "Bilal Ahmed".to_string(),
    ///     email: "bilal.dev@gmail.com".to_string(),
    ///     phone: "+92 301 7654321".to_string(),
    ///     role: "Developer".to_string(),
    ///     address: String::new(),
    ///     salary: "2000.00".to_string(),
    ///     currency: "USD".to_string(),
    /// };
    /// assert_eq!(record.salary_display(), "2,000 USD");
    /// ```
    pub fn salary_display(&self) -> String {
        format_salary(&self.salary, &self.currency)
    }
}

/// Input for creating a record.
///
/// When `id` is `None` the store assigns a fresh one. Text fields are
/// trimmed, salary is normalized and an empty currency takes the
/// configured default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEmployee {
    /// Caller-supplied id, if any.
    pub id: Option<String>,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Job role.
    pub role: String,
    /// Postal address.
    pub address: String,
    /// Raw salary input; blank means unset.
    pub salary: String,
    /// Currency code; blank means the configured default.
    pub currency: String,
}

impl NewEmployee {
    /// Builds the record to be stored under `id`.
    pub fn into_record(self, id: String, default_currency: &str) -> RecordResult<EmployeeRecord> {
        let record = EmployeeRecord {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.role.trim().to_string(),
            address: self.address.trim().to_string(),
            salary: normalize_salary(&self.salary)?,
            currency: currency_or_default(&self.currency, default_currency),
        };
        record.validate()?;
        Ok(record)
    }
}

/// A partial update: every `Some` field replaces the stored value.
///
/// The id is not part of a patch and can never change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeePatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement email.
    pub email: Option<String>,
    /// Replacement phone.
    pub phone: Option<String>,
    /// Replacement role.
    pub role: Option<String>,
    /// Replacement address.
    pub address: Option<String>,
    /// Replacement raw salary; blank clears it.
    pub salary: Option<String>,
    /// Replacement currency; blank resets to the default.
    pub currency: Option<String>,
}

impl EmployeePatch {
    /// Returns true when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self == &EmployeePatch::default()
    }

    /// Merges this patch over `current`, returning the updated copy.
    ///
    /// The merged record must still pass [`EmployeeRecord::validate`].
    pub fn apply(
        &self,
        current: &EmployeeRecord,
        default_currency: &str,
    ) -> RecordResult<EmployeeRecord> {
        let text = |patch: &Option<String>, existing: &str| match patch {
            Some(value) => value.trim().to_string(),
            None => existing.to_string(),
        };

        let salary = match &self.salary {
            Some(raw) => normalize_salary(raw)?,
            None => current.salary.clone(),
        };
        let currency = match &self.currency {
            Some(code) => currency_or_default(code, default_currency),
            None => current.currency.clone(),
        };

        let merged = EmployeeRecord {
            id: current.id.clone(),
            name: text(&self.name, &current.name),
            email: text(&self.email, &current.email),
            phone: text(&self.phone, &current.phone),
            role: text(&self.role, &current.role),
            address: text(&self.address, &current.address),
            salary,
            currency,
        };
        merged.validate()?;
        Ok(merged)
    }
}

fn currency_or_default(code: &str, default_currency: &str) -> String {
    let code = code.trim();
    if code.is_empty() {
        default_currency.to_string()
    } else {
        code.to_string()
    }
}
