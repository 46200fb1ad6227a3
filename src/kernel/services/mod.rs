//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types the sidebar actions depend on.
//! - `adapters`: OS/runtime specific implementations (IO/async).

pub mod adapters;
pub mod ports;
