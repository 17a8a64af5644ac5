//! Pterodactyl-SDK – typed async client for the Pterodactyl **application** API.
//!
//! The SDK surface is exposed via service accessors on [`Client`]:
//! - `Client::users()`
//! - `Client::nodes()`
//! - `Client::locations()`
//! - `Client::servers()`
//! - `Client::allocations()`

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;
mod util;

pub use auth::SecretString;
pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use types::*;
