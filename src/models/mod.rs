//! Core data models for the employee record store.
//!
//! This module contains the record type, its create and update inputs,
//! and salary helpers.

mod employee;
mod salary;

pub use employee::{EmployeePatch, EmployeeRecord, NewEmployee};
pub use salary::{SALARY_PLACEHOLDER, SALARY_SCALE, format_salary, normalize_salary};
