//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - APS document types
//! - [`mappers`] - Catalogue entity to APS document mapping
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod mappers;
pub mod middleware;
pub mod routes;
