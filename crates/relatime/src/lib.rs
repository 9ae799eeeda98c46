//! # relatime
//!
//! Calendar-aware relative time descriptions.
//!
//! Given a reference instant and a target instant, relatime decomposes the
//! calendar difference into years, months, days, hours, minutes, and
//! seconds — with borrow semantics across variable-length months and leap
//! years — and renders it as a sentence like "3 days ago" or
//! "in 1 year 1 month".
//!
//! The difference is field-wise calendar math, not elapsed-time math: one
//! month after January 15 is exactly "1 month", whether that month had 28
//! or 31 days. All functions take the reference instant as an explicit
//! argument (no system clock access) — sample `Utc::now()` once and pass it
//! in, keeping every operation pure and testable with injected anchors.
//!
//! ## Modules
//!
//! - [`relative`] — direction classification, calendar-difference decomposition, rendering
//! - [`error`] — error types

pub mod error;
pub mod relative;

pub use error::RelativeError;
pub use relative::{
    classify, convert_to_relative_time, decompose_future, decompose_past, relative_between,
    Direction, RelativeResult,
};
