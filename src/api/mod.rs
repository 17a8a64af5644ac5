//! High-level application-API services.
//!
//! The primary SDK surface is exposed via service accessors on [`crate::Client`]:
//! `users()`, `nodes()`, `locations()`, `servers()`, `allocations()`.

pub mod allocations;
pub mod locations;
pub mod nodes;
pub mod servers;
pub mod users;

pub use allocations::*;
pub use locations::*;
pub use nodes::*;
pub use servers::*;
pub use users::*;
