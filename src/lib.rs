//! Media File Handler Server library.
//!
//! This library provides the core functionality for the media file server,
//! including database operations, domain models, and API handlers.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
