// Prompt library: search, usage counters, ratings and the moderation queue.

pub mod analytics;
pub mod handlers;
pub mod library;
pub mod models;
pub mod moderation;
pub mod rating;
pub mod repository;
pub mod search;
pub mod seed;
pub mod validation;
