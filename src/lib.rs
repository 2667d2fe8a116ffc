//! Korean review sentiment analysis and health-profile product recommendation.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod nlp;
pub mod recommend;
pub mod sentiment;
