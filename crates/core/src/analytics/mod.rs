//! Analytics module - aggregation over entity snapshots and the page views
//! built from it.

pub mod aggregation;
mod analytics_model;
mod analytics_service;

#[cfg(test)]
mod aggregation_tests;

pub use analytics_model::*;
pub use analytics_service::{AnalyticsService, AnalyticsServiceTrait};
