//! Presentation helpers shared by the CLI
//!
//! Text reports for humans, NDJSON events for machines. Commands decide
//! *what* to show, these helpers decide *how* it looks.

pub mod events;
pub mod report;
