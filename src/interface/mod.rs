//! # Interface Layer
//!
//! The command-line surface of the client.

pub mod cli;
