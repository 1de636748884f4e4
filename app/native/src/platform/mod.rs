//! Platform helpers for locating files on the host.
//!
//! - [`path`] - Shell-like path expansion for configured paths
//! - [`data`] - Per-install data directory layout

pub mod data;
pub mod path;
