//! # Consumer Trait
//!
//! Consumers sit at the end of a pipeline: they drain the stream produced
//! by the stages before them, collecting items or writing them to a
//! destination. Draining is where a pipeline actually runs: everything
//! upstream is lazy until a consumer polls.
//!
//! ## Overview
//!
//! - **Stream Consumption**: async consumption of input streams
//! - **Error Handling**: configurable error strategy per consumer
//! - **Component Information**: name and type information for reporting
//!
//! ## Example
//!
//! ```rust,no_run
//! use feedweave::consumer::Consumer;
//! use feedweave::consumers::vec::vec_consumer::VecConsumer;
//! use futures::stream;
//!
//! # async fn example() {
//! let mut consumer = VecConsumer::<i32>::new();
//! let input_stream = Box::pin(stream::iter(vec![1, 2, 3]));
//! consumer.consume(input_stream).await;
//! # }
//! ```

use crate::error::{ComponentInfo, ErrorAction, ErrorContext, ErrorStrategy, StreamError};
use crate::input::Input;
use async_trait::async_trait;

/// Configuration for a consumer component.
#[derive(Debug, Clone)]
pub struct ConsumerConfig<M: std::fmt::Debug + Clone + Send + Sync> {
  /// The error handling strategy to use when consuming items.
  pub error_strategy: ErrorStrategy<M>,
  /// Optional name for identifying this consumer in logs and errors.
  pub name: Option<String>,
}

impl<M: std::fmt::Debug + Clone + Send + Sync> Default for ConsumerConfig<M> {
  fn default() -> Self {
    Self {
      error_strategy: ErrorStrategy::Stop,
      name: None,
    }
  }
}

impl<M: std::fmt::Debug + Clone + Send + Sync> ConsumerConfig<M> {
  /// Sets the error handling strategy for this consumer configuration.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<M>) -> Self {
    self.error_strategy = strategy;
    self
  }

  /// Sets the name for this consumer configuration.
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

/// Trait for components that consume data streams.
///
/// Consumers drain the stream handed to them. Because upstream stages are
/// pull-based, a consumer that stops early also stops every stage above it.
#[async_trait]
pub trait Consumer: Input
where
  Self::Input: std::fmt::Debug + Clone + Send + Sync,
{
  /// Consumes the input stream to completion (or until the consumer
  /// decides to stop polling).
  async fn consume(&mut self, stream: Self::InputStream);

  /// Creates a new consumer instance with the given configuration.
  #[must_use]
  fn with_config(&self, config: ConsumerConfig<Self::Input>) -> Self
  where
    Self: Sized + Clone,
  {
    let mut this = self.clone();
    this.set_config(config);
    this
  }

  /// Sets the configuration for this consumer.
  fn set_config(&mut self, config: ConsumerConfig<Self::Input>) {
    self.set_config_impl(config);
  }

  /// Returns a reference to the consumer's configuration.
  fn config(&self) -> &ConsumerConfig<Self::Input> {
    self.get_config_impl()
  }

  /// Returns a mutable reference to the consumer's configuration.
  fn config_mut(&mut self) -> &mut ConsumerConfig<Self::Input> {
    self.get_config_mut_impl()
  }

  /// Handles an error according to the configured strategy.
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
        .unwrap_or_else(|| "consumer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }

  /// Stores the configuration. Implemented by each consumer.
  fn set_config_impl(&mut self, config: ConsumerConfig<Self::Input>);

  /// Returns the stored configuration. Implemented by each consumer.
  fn get_config_impl(&self) -> &ConsumerConfig<Self::Input>;

  /// Returns the stored configuration mutably. Implemented by each consumer.
  fn get_config_mut_impl(&mut self) -> &mut ConsumerConfig<Self::Input>;
}
