//! Repository initialization and the on-disk repository handle.
//!
//! ## Design Goals
//!
//! This module creates the canonical `.git`-style metadata layout (bare or
//! non-bare) and hands back a lightweight [`OnDisk`] descriptor bound to the
//! resolved location. Idempotency is an explicit, caller-selected policy
//! ([`OnExisting`]) rather than a hard-coded behavior, since "fail if it
//! exists" and "safe to call repeatedly" are both legitimate depending on
//! the calling context.
//!
//! ## No built-in locking
//!
//! The only shared resource here is the filesystem subtree at the target
//! location, and this module provides **no** advisory lock around it.
//! Concurrent callers racing to initialize the same location may both pass
//! the already-initialized check before either has written the
//! configuration file, leaving an inconsistent layout. Callers who need
//! concurrent access must serialize initialization of a given location
//! externally.

mod error;
pub use error::{Error, Result};

mod guard;
mod layout;
mod location;
mod on_disk;

pub use location::Location;
pub use on_disk::{InitOptions, OnDisk, OnExisting};
