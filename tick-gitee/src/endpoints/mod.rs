//! # Gitee-style API Endpoints
//!
//! Endpoint implementations for the issue operations of the uniform
//! platform contract.

pub mod issues;
