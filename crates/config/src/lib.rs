//! User-facing configuration for Mindsum: the persisted settings record, the
//! TOML file + environment loading path, and the per-call override
//! composition that keeps effective settings immutable.

pub mod models;
pub mod settings;

pub use models::available_models;
pub use settings::{Overrides, Settings, VendorSettings};
