//! CLI infrastructure for the playbook generator
//!
//! This module provides the command-line interface for generating the
//! catalog artifacts, exporting page records, and printing summary
//! statistics.

pub mod commands;
pub mod output;
