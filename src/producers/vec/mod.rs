//! Vec producer module.
//!
//! This module provides the `VecProducer` which feeds a `Vec` into a
//! pipeline as a stream.

/// Output type definitions for the Vec producer.
pub mod output;
/// Producer trait implementation for Vec.
pub mod producer;
/// The Vec producer implementation.
pub mod vec_producer;
