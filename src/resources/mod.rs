//! Knowledge-base resource updates
//!
//! Refreshes the local markdown corpus from its upstream git repositories:
//! each configured resource is shallow-cloned, trimmed down to the
//! directory that holds the documents, and copied over the local target.

mod updater;

pub use updater::{update_all, update_resource};
