//! # Application Layer
//!
//! Orchestration of a client session: the runner, the printed report and logging setup.

pub mod logging;
pub mod report;
pub mod runner;
