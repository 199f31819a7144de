//! # Producer Trait
//!
//! Producers originate streams: they sit at the head of a pipeline and feed
//! items to downstream transformers and consumers. A producer owns its data
//! source (a vector, a file, a socket) and exposes it as a lazy stream.
//!
//! ## Overview
//!
//! - **Stream Production**: `produce()` returns the output stream
//! - **Error Handling**: configurable error strategy per producer
//! - **Component Information**: name and type information for reporting
//!
//! ## Example
//!
//! ```rust,no_run
//! use feedweave::producer::Producer;
//! use feedweave::producers::vec::vec_producer::VecProducer;
//!
//! let mut producer = VecProducer::new(vec![1, 2, 3]);
//! let stream = producer.produce();
//! ```

use crate::error::{ComponentInfo, ErrorAction, ErrorContext, ErrorStrategy, StreamError};
use crate::output::Output;

/// Configuration for a producer component.
///
/// Holds the options shared by every producer: the error handling strategy
/// and an optional name used in logs and error reports.
#[derive(Debug, Clone)]
pub struct ProducerConfig<M: std::fmt::Debug + Clone + Send + Sync> {
  /// The error handling strategy to use when producing items.
  pub error_strategy: ErrorStrategy<M>,
  /// Optional name for identifying this producer in logs and errors.
  pub name: Option<String>,
}

impl<M: std::fmt::Debug + Clone + Send + Sync> Default for ProducerConfig<M> {
  fn default() -> Self {
    Self {
      error_strategy: ErrorStrategy::Stop,
      name: None,
    }
  }
}

impl<M: std::fmt::Debug + Clone + Send + Sync> ProducerConfig<M> {
  /// Sets the error handling strategy for this producer configuration.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<M>) -> Self {
    self.error_strategy = strategy;
    self
  }

  /// Sets the name for this producer configuration.
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

/// Trait for components that originate data streams.
///
/// Producers are the starting point of pipelines. Calling [`produce`]
/// borrows the producer's source and returns a lazy stream over it; nothing
/// is read until the stream is polled.
///
/// [`produce`]: Producer::produce
pub trait Producer: Output
where
  Self::Output: std::fmt::Debug + Clone + Send + Sync,
{
  /// Produces the output stream for this producer.
  fn produce(&mut self) -> Self::OutputStream;

  /// Creates a new producer instance with the given configuration.
  #[must_use]
  fn with_config(&self, config: ProducerConfig<Self::Output>) -> Self
  where
    Self: Sized + Clone,
  {
    let mut this = self.clone();
    this.set_config(config);
    this
  }

  /// Sets the configuration for this producer.
  fn set_config(&mut self, config: ProducerConfig<Self::Output>) {
    self.set_config_impl(config);
  }

  /// Returns a reference to the producer's configuration.
  fn config(&self) -> &ProducerConfig<Self::Output> {
    self.get_config_impl()
  }

  /// Returns a mutable reference to the producer's configuration.
  fn config_mut(&mut self) -> &mut ProducerConfig<Self::Output> {
    self.get_config_mut_impl()
  }

  /// Handles an error according to the configured strategy.
  fn handle_error(&self, error: &StreamError<Self::Output>) -> ErrorAction {
    match self.config().error_strategy() {
      ErrorStrategy::Stop => ErrorAction::Stop,
      ErrorStrategy::Skip => ErrorAction::Skip,
      ErrorStrategy::Retry(n) if error.retries < n => ErrorAction::Retry,
      ErrorStrategy::Custom(ref handler) => handler(error),
      _ => ErrorAction::Stop,
    }
  }

  /// Creates an error context for error reporting.
  fn create_error_context(&self, item: Option<Self::Output>) -> ErrorContext<Self::Output> {
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
        .unwrap_or_else(|| "producer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }

  /// Stores the configuration. Implemented by each producer.
  fn set_config_impl(&mut self, config: ProducerConfig<Self::Output>);

  /// Returns the stored configuration. Implemented by each producer.
  fn get_config_impl(&self) -> &ProducerConfig<Self::Output>;

  /// Returns the stored configuration mutably. Implemented by each producer.
  fn get_config_mut_impl(&mut self) -> &mut ProducerConfig<Self::Output>;
}
