//! # FeedWeave
//!
//! Composable, async, stream-first feed processing in pure Rust.
//!
//! FeedWeave provides the building blocks for feed-processing pipelines:
//! producers feed records in, transformers reshape the record stream, and
//! consumers drain it. The flagship stage is the uniq transformer, which
//! suppresses every record after the first one seen for each distinct value
//! of a configured field.
//!
//! ## Key Features
//!
//! - **Stream-First**: Every stage is a lazy, pull-based stream transform
//! - **Async-First**: Built on Tokio and `futures` streams
//! - **Type-Safe**: Stages connect through typed `Input`/`Output` seams
//! - **First-Occurrence Dedup**: Exact, order-preserving, infinite-feed safe
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feedweave::transformers::uniq::{UniqConfig, uniq};
//! use feedweave::record::Record;
//!
//! # fn example(feed: Vec<Record>) -> Result<(), feedweave::error::FeedError> {
//! let config = UniqConfig::default(); // dedup key: "title"
//! for item in uniq(feed, &config)? {
//!     let record = item?;
//!     println!("{record:?}");
//! }
//! # Ok(())
//! # }
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Consumer trait and configuration for components that drain streams.
pub mod consumer;
/// Invocation context passed through stages by the surrounding engine.
pub mod context;
/// Error taxonomy, error strategies, and stream error context.
pub mod error;
/// Input trait for components that consume input streams.
pub mod input;
/// Output trait for components that produce output streams.
pub mod output;
/// Pipeline builder for composing producers, transformers, and consumers.
pub mod pipeline;
/// Producer trait and configuration for components that originate streams.
pub mod producer;
/// The record data model: ordered field mappings and hashable key values.
pub mod record;
/// Transformer trait and configuration for stream-to-stream stages.
pub mod transformer;

/// Built-in consumers.
pub mod consumers;
/// Built-in producers.
pub mod producers;
/// Built-in transformers.
pub mod transformers;

pub use consumer::{Consumer, ConsumerConfig};
pub use context::Context;
pub use error::FeedError;
pub use input::Input;
pub use output::Output;
pub use producer::{Producer, ProducerConfig};
pub use record::{FeedItem, KeyValue, Record};
pub use transformer::{Transformer, TransformerConfig};
