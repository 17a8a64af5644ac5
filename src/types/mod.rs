//! Shared request/response types.

pub mod allocations;
pub mod common;
pub mod locations;
pub mod nodes;
pub mod servers;
pub mod users;

pub use allocations::*;
pub use common::*;
pub use locations::*;
pub use nodes::*;
pub use servers::*;
pub use users::*;
