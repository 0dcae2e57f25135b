//! Return-reason analytics — in-memory intent records and the aggregation
//! behind the seller dashboard.

pub mod aggregate;
pub mod types;

pub use aggregate::summarize;
pub use types::{ProductReturnSummary, ReasonBreakdown, ReturnAnalytics, ReturnIntentRecord};
