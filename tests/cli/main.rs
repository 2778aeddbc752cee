//! CLI integration tests for stylemark.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (lint, rules)
//! - Stdin/stdout handling
//! - Exit codes
//! - Configuration discovery
//! - Error handling

mod common;
mod lint;
