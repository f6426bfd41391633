//! Domain Entities
//!
//! Core grading-domain entities with identity and lifecycle.
//! - `RateInputModel` - the mutable working input state
//! - `Band` / `BandTable` - computed five-point ranges per grade
//! - `Scenario` - a persisted, versioned snapshot of inputs and bands

mod band;
mod rate_input;
mod scenario;

pub use band::{round_currency, Band, BandTable, CURRENCY_DECIMALS};
pub use rate_input::{RateInputModel, RATE_RANGE};
pub use scenario::Scenario;
