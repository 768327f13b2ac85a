//! This crate implements the repository-initialization core for a
//! git-compatible version control system: given a target path, it creates
//! the on-disk metadata layout that every later repository operation
//! (object storage, ref updates, commits) depends on being correct.
//!
//! The object database, ref machinery, and transport layers are out of
//! scope; this crate only establishes their initialization-time contracts
//! (an empty object store, an empty refs hierarchy, a symbolic HEAD, a
//! configuration file).

#![deny(warnings)]

pub mod repo;

#[cfg(feature = "clap")]
pub mod cli;

#[cfg(test)]
mod test_support;
