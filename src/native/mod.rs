//! Native read concern resources
//!
//! A read concern's level is stored by a resource owned by the lower-level
//! driver. This module defines the seam `ReadConcern` talks through and
//! ships the driver's own resource type.
//!
//! The resource is opaque to callers. Only these operations are used:
//! - allocate an empty resource
//! - set the level (may be rejected)
//! - query the level
//! - append the level to an outgoing command
//! - deep copy
//!
//! Destruction is the resource's `Drop`.

mod driver;

pub use driver::DriverReadConcern;

use std::fmt;

use crate::document::Document;

/// Operations a native read concern resource exposes.
///
/// Implementations must accept every canonical level name in `set_level`.
/// `level` must be free of side effects so that shared references can be
/// read from several threads when the implementor is `Sync`.
pub trait NativeReadConcern: fmt::Debug + Sized {
    /// Allocate a fresh resource with no level set.
    fn allocate() -> Self;

    /// Set the level. Returns false if the resource rejects it.
    fn set_level(&mut self, level: &str) -> bool;

    /// The configured level, or `None` if unset.
    fn level(&self) -> Option<&str>;

    /// Merge this resource's fields into `command`. Returns false on failure.
    fn append_to(&self, command: &mut Document) -> bool;

    /// Produce an independent copy sharing no state with `self`.
    fn deep_copy(&self) -> Self;
}
