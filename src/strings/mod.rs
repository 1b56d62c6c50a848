//! # Strings Module
//!
//! Centralizes log lines and the text of the printed report.

pub mod logs;
pub mod messages;
