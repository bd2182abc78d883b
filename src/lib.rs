//! Salary Engine
//!
//! This crate calculates attendance-based monthly salaries: it classifies an
//! employee's attendance records for a calendar month, prices overtime by
//! category and produces a deterministic salary breakdown, for a single
//! employee or a whole roster.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
