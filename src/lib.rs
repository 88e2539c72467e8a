//! Earnings Estimator
//!
//! This crate computes forecasted pay for a work schedule over a date range and
//! keeps an editable log of materialized shift records, persisted through an
//! opaque key-value store and exportable as delimited text.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
pub mod tracker;
