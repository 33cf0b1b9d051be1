//! Command implementations for the `graphkit` binary.

pub mod commands;
