//! Service layer owning the user table and its persistence.
//! - Keeps all table state behind the store's lock; nothing else touches it.
//! - Persists the whole table to its JSON file on every mutation.
//! - Surfaces typed errors for the server crate to map onto HTTP responses.

pub mod errors;
pub mod file;
pub mod runtime;
