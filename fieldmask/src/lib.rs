//! Fieldmask applies nested field masks to protobuf-like messages.
//!
//! A field mask is a set of dot-delimited paths such as `["user.name", "photo"]`. The paths are
//! compiled once into a [`FieldMask`] tree and then used to either *filter* a message (keep only
//! the listed fields) or *prune* it (clear only the listed fields). Masks descend through
//! singular sub-messages, repeated fields and maps, where map entries are matched by their
//! stringified key.
//!
//! Messages are reached through a small set of reflection traits: [`MessageInstance`],
//! [`ListInstance`], [`MapInstance`] and [`OneofInstance`]. Generally it is best to use the derive
//! macro from [`fieldmask_derive`] to implement them, which works on top of prost generated
//! types as well as plain structs.
//!
//! # Examples
//!
//! ## Filtering
//!
//! ```
//! use fieldmask::{FieldMask, Instance};
//!
//! #[derive(Instance, Clone, Debug, Default, PartialEq)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(Instance, Clone, Debug, Default, PartialEq)]
//! struct Profile {
//!     user: Option<User>,
//!     tags: Vec<String>,
//! }
//!
//! let mut profile = Profile {
//!     user: Some(User { id: 1, name: "n".to_string() }),
//!     tags: vec!["a".to_string()],
//! };
//! let mask = FieldMask::new(["user.name"]);
//! mask.filter(&mut profile);
//! assert_eq!(
//!     profile,
//!     Profile {
//!         user: Some(User { id: 0, name: "n".to_string() }),
//!         tags: vec![],
//!     }
//! );
//! ```
//!
//! ## Wildcards
//!
//! A [`WildcardFieldMask`] additionally accepts `*` as a segment. It matches any field name or map
//! key that has no more specific entry at the same level.
//!
//! ```
//! use std::collections::HashMap;
//! use fieldmask::Instance;
//!
//! #[derive(Instance, Clone, Debug, Default, PartialEq)]
//! struct Inventory {
//!     stock: HashMap<String, Item>,
//! }
//!
//! #[derive(Instance, Clone, Debug, Default, PartialEq)]
//! struct Item {
//!     count: u32,
//!     location: String,
//! }
//!
//! let mut inventory = Inventory::default();
//! inventory.stock.insert("apple".into(), Item { count: 3, location: "a1".into() });
//! inventory.stock.insert("pear".into(), Item { count: 5, location: "b2".into() });
//!
//! fieldmask::wildcard_prune(&mut inventory, ["stock.*.location"]);
//! assert_eq!(inventory.stock["apple"], Item { count: 3, location: String::new() });
//! assert_eq!(inventory.stock["pear"], Item { count: 5, location: String::new() });
//! ```
//!
//! # Limits
//!
//! Traversal is recursive and proceeds as deep as the message nests. There is no explicit depth
//! bound.
//!
//! [`fieldmask_derive`]: ../fieldmask_derive/index.html
pub use bytes::Bytes;
pub use smol_str::SmolStr;
use thiserror::Error;

extern crate self as fieldmask;

mod field_mask;
mod instance;
mod primitives;
#[cfg(feature = "prost-types")]
mod protobuf;
mod traverse;
mod typed;

pub use field_mask::*;
pub use instance::*;
pub use primitives::*;
pub use typed::*;

#[cfg(feature = "derive")]
pub use fieldmask_derive::Instance;


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("empty field path")]
    EmptyPath,
    #[error("empty segment at position {position} in path {path:?}")]
    EmptySegment { path: SmolStr, position: usize },
}

/// Keeps the fields of `msg` listed in `paths` and clears all the rest.
///
/// This is a convenience wrapper around [`FieldMask::filter`]. If the same paths are applied to
/// many messages build the [`FieldMask`] once and reuse it.
pub fn filter<M, I, S>(msg: &mut M, paths: I)
where
    M: MessageInstance + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FieldMask::new(paths).filter(msg)
}

/// Clears the fields of `msg` listed in `paths`, leaving everything else untouched.
///
/// This is a convenience wrapper around [`FieldMask::prune`].
pub fn prune<M, I, S>(msg: &mut M, paths: I)
where
    M: MessageInstance + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FieldMask::new(paths).prune(msg)
}

/// Like [`filter`], but `*` segments in `paths` match any field name or map key.
pub fn wildcard_filter<M, I, S>(msg: &mut M, paths: I)
where
    M: MessageInstance + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    WildcardFieldMask::from_paths(paths).filter(msg)
}

/// Like [`prune`], but `*` segments in `paths` match any field name or map key.
pub fn wildcard_prune<M, I, S>(msg: &mut M, paths: I)
where
    M: MessageInstance + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    WildcardFieldMask::from_paths(paths).prune(msg)
}
