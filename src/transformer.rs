//! # Transformer Trait
//!
//! Transformers are the stream-to-stream stages of a pipeline: each one
//! consumes an input stream and returns an output stream over it. The
//! returned stream is lazy: a transformer does no work until its consumer
//! polls, and it pulls at most one input item per output decision, so
//! infinite feeds flow through without ever being materialized.
//!
//! ## Overview
//!
//! - **Stream Transformation**: `transform()` maps an input stream to an
//!   output stream
//! - **Error Handling**: configurable error strategy per transformer
//! - **Component Information**: name and type information for reporting
//!
//! ## Example
//!
//! ```rust,no_run
//! use feedweave::transformer::Transformer;
//! use feedweave::transformers::uniq::uniq_transformer::UniqTransformer;
//! use feedweave::record::FeedItem;
//! use futures::{StreamExt, stream};
//!
//! # async fn example(items: Vec<FeedItem>) {
//! let mut transformer = UniqTransformer::new().with_uniq_key("guid");
//! let output = transformer.transform(Box::pin(stream::iter(items)));
//! let collected: Vec<FeedItem> = output.collect().await;
//! # }
//! ```
//!
//! ## Cancellation
//!
//! Because output streams are pull-based, a consumer that stops polling
//! stops the whole chain: no stage keeps reading its input in the
//! background.

use crate::error::{ComponentInfo, ErrorAction, ErrorContext, ErrorStrategy, StreamError};
use crate::{input::Input, output::Output};

/// Configuration for transformers, including error handling strategy and naming.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformerConfig<M: std::fmt::Debug + Clone + Send + Sync> {
  /// The error handling strategy to use when errors occur.
  pub error_strategy: ErrorStrategy<M>,
  /// Optional name for identifying this transformer in logs and errors.
  pub name: Option<String>,
}

impl<M: std::fmt::Debug + Clone + Send + Sync> Default for TransformerConfig<M> {
  fn default() -> Self {
    Self {
      error_strategy: ErrorStrategy::Stop,
      name: None,
    }
  }
}

impl<M: std::fmt::Debug + Clone + Send + Sync> TransformerConfig<M> {
  /// Sets the error handling strategy for this transformer configuration.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<M>) -> Self {
    self.error_strategy = strategy;
    self
  }

  /// Sets the name for this transformer configuration.
  pub fn with_name(mut self, name: String) -> Self {
    self.name = Some(name);
    self
  }

  /// Returns the current error handling strategy.
  pub fn error_strategy(&self) -> ErrorStrategy<M> {
    self.error_strategy.clone()
  }

  /// Returns the current name, if set.
  pub fn name(&self) -> Option<String> {
    self.name.clone()
  }
}

/// Trait for components that transform data streams.
///
/// Transformers process items as they flow through the pipeline. They can
/// filter, map, aggregate, or perform any other transformation on stream
/// items.
///
/// Any per-invocation state (such as a deduplication seen-set) must be
/// created inside [`transform`] so that each returned stream owns its state
/// exclusively: invocations are restartable, never shared.
///
/// [`transform`]: Transformer::transform
pub trait Transformer: Input + Output
where
  Self::Input: std::fmt::Debug + Clone + Send + Sync,
{
  /// Transforms a stream of input items into a stream of output items.
  ///
  /// The returned stream is lazy: it pulls from `input` only when polled,
  /// and consumes at most one input item per output decision.
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream;

  /// Creates a new transformer instance with the given configuration.
  #[must_use]
  fn with_config(&self, config: TransformerConfig<Self::Input>) -> Self
  where
    Self: Sized + Clone,
  {
    let mut this = self.clone();
    this.set_config(config);
    this
  }

  /// Sets the configuration for this transformer.
  fn set_config(&mut self, config: TransformerConfig<Self::Input>) {
    self.set_config_impl(config);
  }

  /// Returns a reference to the transformer's configuration.
  fn config(&self) -> &TransformerConfig<Self::Input> {
    self.get_config_impl()
  }

  /// Returns a mutable reference to the transformer's configuration.
  fn config_mut(&mut self) -> &mut TransformerConfig<Self::Input> {
    self.get_config_mut_impl()
  }

  /// Handles an error that occurred during stream processing.
  ///
  /// Determines the appropriate `ErrorAction` from the transformer's
  /// configured `ErrorStrategy`.
  fn handle_error(&self, error: &StreamError<Self::Input>) -> ErrorAction {
    match self.config().error_strategy() {
      ErrorStrategy::Stop => ErrorAction::Stop,
      ErrorStrategy::Skip => ErrorAction::Skip,
      ErrorStrategy::Retry(n) if error.retries < n => ErrorAction::Retry,
      ErrorStrategy::Custom(ref handler) => handler(error),
      _ => ErrorAction::Stop,
    }
  }

  /// Creates an error context for error reporting.
  fn create_error_context(&self, item: Option<Self::Input>) -> ErrorContext<Self::Input> {
    ErrorContext {
      timestamp: chrono::Utc::now(),
      item,
      component_name: self.component_info().name,
      component_type: self.component_info().type_name,
    }
  }

  /// Returns information about the component for error reporting.
  fn component_info(&self) -> ComponentInfo {
    ComponentInfo {
      name: self
        .config()
        .name()
        .unwrap_or_else(|| "transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }

  /// Stores the configuration. Implemented by each transformer.
  fn set_config_impl(&mut self, config: TransformerConfig<Self::Input>);

  /// Returns the stored configuration. Implemented by each transformer.
  fn get_config_impl(&self) -> &TransformerConfig<Self::Input>;

  /// Returns the stored configuration mutably. Implemented by each transformer.
  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig<Self::Input>;
}
