//! An ordered map based on a red-black tree.
//!
//! The map keeps its entries sorted by key under a configurable
//! comparator and supports cursor-style positional access: lookups and
//! insertions hand back a [`Cursor`], a small detached handle that can
//! be stored across mutations and later dereferenced, advanced, or used
//! to remove its entry. Cursors are validated on every use, so a handle
//! whose entry is gone, or that belongs to a different map, reports
//! [`Error::InvalidCursor`] instead of misbehaving.
//!
//! # Examples
//!
//! ```
//! use rbmap::Map;
//!
//! let mut map = Map::new();
//!
//! map.insert(2, "b");
//! map.insert(3, "c");
//! let (cur, _) = map.insert(1, "a");
//!
//! assert_eq!(map.first(), Some((&1, &"a")));
//! assert_eq!(map.remove_at(cur), Ok((1, "a")));
//! assert_eq!(map.first(), Some((&2, &"b")));
//! ```

#![warn(missing_docs)]

mod error;
pub mod map;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

pub use crate::error::Error;
pub use crate::map::{Cursor, Map};
