//! Uniq transformer module.
//!
//! This module provides first-occurrence deduplication of a record feed:
//! you select the field to filter on, and uniq removes the duplicates.
//! For each distinct value of the configured key field, only the earliest
//! record passes; every later record with the same key is suppressed.
//!
//! Two entry points share one decision kernel:
//!
//! - [`iter::uniq`] is the synchronous, lazy [`Iterator`] adapter
//! - [`uniq_transformer::UniqTransformer`] is the asynchronous [`crate::Transformer`]
//!   over feed-item streams
//!
//! Both preserve input order, keep exactly one record per distinct key, and
//! operate strictly incrementally, so infinite feeds are supported.

/// Input types for the uniq transformer.
pub mod input;
/// The synchronous iterator adapter.
pub mod iter;
/// Output types for the uniq transformer.
pub mod output;
/// Transformer trait implementation for uniq.
pub mod transformer;
/// The uniq transformer implementation.
pub mod uniq_transformer;

pub use iter::{Uniq, uniq};
pub use uniq_transformer::{DEFAULT_UNIQ_KEY, SeenSet, UniqConfig, UniqTransformer};
