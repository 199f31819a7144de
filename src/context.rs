//! Invocation context handed down from the surrounding engine.
//!
//! The engine that composes pipelines may attach per-run information to the
//! stages it builds. Stages carry the context through without inspecting it;
//! it exists so the engine can recover its own bookkeeping from a stage it
//! handed off.

use std::collections::HashMap;

/// Per-invocation context supplied by the surrounding pipeline engine.
///
/// Opaque to stages: FeedWeave components store it and hand it back, nothing
/// more.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
  /// Engine-assigned identifier for the pipeline run, if any.
  pub run_id: Option<String>,
  /// Free-form engine annotations.
  pub tags: HashMap<String, String>,
}

impl Context {
  /// Creates an empty context.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a context carrying a run identifier.
  pub fn with_run_id(run_id: impl Into<String>) -> Self {
    Self {
      run_id: Some(run_id.into()),
      tags: HashMap::new(),
    }
  }
}
