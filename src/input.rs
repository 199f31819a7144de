//! Input trait for components that consume input streams.
//!
//! The [`Input`] trait is implemented by transformers and consumers that
//! receive data from upstream components.
//!
//! # Key Concepts
//!
//! - **Input Type**: the item the component accepts; for record-processing
//!   stages this is a [`crate::record::FeedItem`], so errors travel on the
//!   same stream as records
//! - **InputStream**: a pinned, boxed async stream yielding those items
//! - **Send Bound**: streams cross task boundaries, so items must be `Send`
//!
//! # Quick Start
//!
//! ```rust
//! use feedweave::input::Input;
//! use feedweave::record::FeedItem;
//! use futures::Stream;
//! use std::pin::Pin;
//!
//! struct MyStage;
//!
//! impl Input for MyStage {
//!     type Input = FeedItem;
//!     type InputStream = Pin<Box<dyn Stream<Item = FeedItem> + Send>>;
//! }
//! ```
//!
//! The trait works together with [`crate::output::Output`] to create
//! type-safe pipelines where output types must match input types. Users
//! typically interact with concrete stages rather than the trait directly.

use futures::Stream;
// Import for rustdoc link
#[allow(unused_imports)]
use crate::output::Output;

/// Trait for components that can accept input streams.
///
/// Implemented by transformers and consumers that receive data.
pub trait Input
where
  Self::Input: Send + 'static,
{
  /// The type of items accepted by this component.
  type Input;
  /// The input stream type that yields items of type `Self::Input`.
  type InputStream: Stream<Item = Self::Input> + Send + 'static;
}
