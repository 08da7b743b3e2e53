//! Klaxon CLI library.
//!
//! Command implementations, render configuration and logging setup for the
//! `klaxon` binary.

pub mod commands;
pub mod config;
pub mod logging;
