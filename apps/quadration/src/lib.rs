//! # quadration
//!
//! Application layer over `quadration-core`: configuration, request and
//! response types, and the CLI command implementations used by the
//! `quadration` binary.

pub mod cli;
pub mod config;
pub mod types;
