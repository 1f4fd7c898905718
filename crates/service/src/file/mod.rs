//! File-backed stores persisted as whole JSON documents.

pub mod user_store;
