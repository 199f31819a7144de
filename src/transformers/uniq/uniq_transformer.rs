use crate::context::Context;
use crate::error::{ErrorStrategy, FeedError};
use crate::record::{FeedItem, KeyValue, Record};
use crate::transformer::TransformerConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Field used to extract the dedup key when none is configured.
pub const DEFAULT_UNIQ_KEY: &str = "title";

fn default_uniq_key() -> String {
  DEFAULT_UNIQ_KEY.to_string()
}

/// Stage configuration recognized by the uniq transformer.
///
/// One option: `uniq_key`, the field name used to extract the dedup key
/// from each record. Defaults to `"title"` when unspecified, both in
/// [`Default`] and when deserialized from an engine-supplied configuration
/// object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqConfig {
  /// Field name used to extract the dedup key from each record.
  #[serde(default = "default_uniq_key")]
  pub uniq_key: String,
}

impl Default for UniqConfig {
  fn default() -> Self {
    Self {
      uniq_key: default_uniq_key(),
    }
  }
}

impl UniqConfig {
  /// Creates a configuration with the given key field.
  pub fn new(uniq_key: impl Into<String>) -> Self {
    Self {
      uniq_key: uniq_key.into(),
    }
  }

  /// Checks that the resolved key field is usable.
  ///
  /// An empty field name cannot address a record field and is a
  /// [`FeedError::Configuration`] error.
  pub fn validate(&self) -> Result<(), FeedError> {
    if self.uniq_key.is_empty() {
      return Err(FeedError::Configuration {
        reason: "uniq_key must be a non-empty field name".to_string(),
      });
    }
    Ok(())
  }
}

/// The accumulating set of key values observed during one filtering run.
///
/// Grows monotonically; no entry is ever removed. Each run owns its set
/// exclusively: the set is created when the run starts and discarded with
/// it, so separate invocations never share seen state.
#[derive(Debug, Default)]
pub struct SeenSet {
  seen: HashSet<KeyValue>,
}

impl SeenSet {
  /// Creates an empty seen-set.
  pub fn new() -> Self {
    Self::default()
  }

  /// Decides whether `record` is the first occurrence of its key.
  ///
  /// Extracts the key for `field`, inserts it, and returns `true` iff the
  /// key had not been observed before. This is the whole deduplication
  /// decision; both the iterator and the stream adapters defer to it.
  pub fn admit(&mut self, record: &Record, field: &str) -> Result<bool, FeedError> {
    Ok(self.seen.insert(record.key_value(field)?))
  }

  /// Returns the number of distinct keys observed so far.
  pub fn len(&self) -> usize {
    self.seen.len()
  }

  /// Returns `true` if no keys have been observed yet.
  pub fn is_empty(&self) -> bool {
    self.seen.is_empty()
  }
}

/// A transformer that keeps the first record per distinct key value.
///
/// For each input record, in order, the key field is extracted; the record
/// passes iff its key has not appeared on an earlier passing record of the
/// same run. Output is a subsequence of input: no reordering, no mutation
/// of records, no I/O.
///
/// The seen-set lives inside each stream returned by
/// [`transform`](crate::Transformer::transform), so every invocation
/// restarts deduplication from scratch.
#[derive(Clone)]
pub struct UniqTransformer {
  /// Field name used to extract the dedup key from each record.
  pub uniq_key: String,
  /// Engine invocation context, carried through but not inspected.
  pub context: Option<Context>,
  /// Configuration for the transformer, including error handling strategy.
  pub config: TransformerConfig<FeedItem>,
}

impl Default for UniqTransformer {
  fn default() -> Self {
    Self::new()
  }
}

impl UniqTransformer {
  /// Creates a new `UniqTransformer` deduplicating on the default key
  /// field, `"title"`.
  pub fn new() -> Self {
    Self {
      uniq_key: default_uniq_key(),
      context: None,
      config: TransformerConfig::default(),
    }
  }

  /// Creates a transformer from an engine-resolved stage configuration.
  ///
  /// Fails immediately with [`FeedError::Configuration`] when the resolved
  /// key field is unusable.
  pub fn from_config(config: &UniqConfig) -> Result<Self, FeedError> {
    config.validate()?;
    Ok(Self {
      uniq_key: config.uniq_key.clone(),
      context: None,
      config: TransformerConfig::default(),
    })
  }

  /// Sets the field used to extract the dedup key.
  pub fn with_uniq_key(mut self, uniq_key: impl Into<String>) -> Self {
    self.uniq_key = uniq_key.into();
    self
  }

  /// Attaches the engine's invocation context.
  ///
  /// The transformer stores it untouched; it is the engine's to read back.
  pub fn with_context(mut self, context: Context) -> Self {
    self.context = Some(context);
    self
  }

  /// Sets the error handling strategy for this transformer.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<FeedItem>) -> Self {
    self.config.error_strategy = strategy;
    self
  }

  /// Sets the name for this transformer.
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = Some(name);
    self
  }
}
