//! Core library components.
//!
//! This module contains the reusable logic for sealing secrets, talking to
//! the GitHub secrets API, resolving settings and signaling exit status.

pub mod config;
pub mod constants;
pub mod context;
pub mod domain;
pub mod exit;
pub mod exit_codes;
pub mod github;
pub mod seal;
pub mod session;
pub mod transport;
pub mod validation;
