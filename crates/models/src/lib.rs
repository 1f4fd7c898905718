//! Domain entities shared across the service and server crates.

pub mod user;
