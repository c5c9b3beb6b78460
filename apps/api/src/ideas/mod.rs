// AI idea catalog: submission, scoring, pipeline lifecycle and reporting.
// scoring/assessment/lifecycle are pure; pipeline.rs composes them with the repository.

pub mod analytics;
pub mod assessment;
pub mod filter;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod pipeline;
pub mod repository;
pub mod scoring;
pub mod seed;
pub mod validation;
