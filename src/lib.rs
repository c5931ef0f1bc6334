//! Operations dashboard
//!
//! Fetches the system, pipeline, ventures, activity, progress and finance
//! documents concurrently and renders them into a tabbed HTML page.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
