//! Output trait for components that produce output streams.
//!
//! The [`Output`] trait is implemented by producers and transformers that
//! generate data for downstream components.
//!
//! # Key Concepts
//!
//! - **Output Type**: the item the component yields; for record-processing
//!   stages this is a [`crate::record::FeedItem`], so errors travel on the
//!   same stream as records
//! - **OutputStream**: a pinned, boxed async stream yielding those items
//! - **Send Bound**: streams cross task boundaries, so items must be `Send`
//!
//! # Quick Start
//!
//! ```rust
//! use feedweave::output::Output;
//! use feedweave::record::FeedItem;
//! use futures::Stream;
//! use std::pin::Pin;
//!
//! struct MyProducer;
//!
//! impl Output for MyProducer {
//!     type Output = FeedItem;
//!     type OutputStream = Pin<Box<dyn Stream<Item = FeedItem> + Send>>;
//! }
//! ```
//!
//! The trait works together with [`Input`] to create type-safe pipelines
//! where output types must match input types.

// Import for rustdoc links
#[allow(unused_imports)]
use crate::input::Input;

use futures::Stream;

/// Trait for components that can produce output streams.
///
/// Implemented by producers and transformers that output data.
pub trait Output
where
  Self::Output: Send + 'static,
{
  /// The type of items produced by this component.
  type Output;
  /// The output stream type that yields items of type `Self::Output`.
  type OutputStream: Stream<Item = Self::Output> + Send + 'static;
}
