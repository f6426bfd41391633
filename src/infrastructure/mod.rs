//! Infrastructure Layer
//!
//! Implementations of the domain ports: durable and in-memory scenario
//! repositories, plus worksheet persistence for the working model.

pub mod repositories;
pub mod worksheet;
