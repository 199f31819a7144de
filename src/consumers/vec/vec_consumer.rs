use crate::consumer::ConsumerConfig;
use crate::error::ErrorStrategy;

/// A consumer that collects every item it is handed into a `Vec`.
#[derive(Clone)]
pub struct VecConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// The items collected so far, in arrival order.
  pub vec: Vec<T>,
  /// Configuration for the consumer, including error handling strategy.
  pub config: ConsumerConfig<T>,
}

impl<T: std::fmt::Debug + Clone + Send + Sync + 'static> Default for VecConsumer<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: std::fmt::Debug + Clone + Send + Sync + 'static> VecConsumer<T> {
  /// Creates a new, empty `VecConsumer`.
  pub fn new() -> Self {
    Self {
      vec: Vec::new(),
      config: ConsumerConfig::default(),
    }
  }

  /// Creates a `VecConsumer` with pre-allocated capacity.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      vec: Vec::with_capacity(capacity),
      config: ConsumerConfig::default(),
    }
  }

  /// Sets the error handling strategy for this consumer.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<T>) -> Self {
    self.config.error_strategy = strategy;
    self
  }

  /// Sets the name for this consumer.
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = Some(name);
    self
  }

  /// Consumes the consumer, returning the collected items.
  pub fn into_vec(self) -> Vec<T> {
    self.vec
  }
}
