//! Startup-time environment checks, re-exported so server code reaches them
//! through the service layer.

pub use common::env::ensure_store_dir;
