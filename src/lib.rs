#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal feedback reporter.
//!
//! A user picks a feedback type, optionally attaches a screenshot of the
//! screen, writes a comment, and sends the report to an HTTP backend.

pub mod config;
pub mod logging;
pub mod model;
pub mod services;
pub mod tui;
