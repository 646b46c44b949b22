//! Employee Record Store
//!
//! This crate keeps an ordered list of employee records, persists it as a
//! JSON array in a key-value store after every change, and derives
//! filtered views of it for display.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod storage;
pub mod store;
