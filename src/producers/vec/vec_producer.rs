use crate::error::ErrorStrategy;
use crate::producer::ProducerConfig;

/// A producer that feeds the elements of a `Vec` into a pipeline.
///
/// Elements are cloned into the stream in order; the producer can be
/// re-produced to replay the same feed.
#[derive(Clone)]
pub struct VecProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// The elements to feed downstream, in order.
  pub data: Vec<T>,
  /// Configuration for the producer, including error handling strategy.
  pub config: ProducerConfig<T>,
}

impl<T: std::fmt::Debug + Clone + Send + Sync + 'static> VecProducer<T> {
  /// Creates a new `VecProducer` over the given elements.
  pub fn new(data: Vec<T>) -> Self {
    Self {
      data,
      config: ProducerConfig::default(),
    }
  }

  /// Sets the error handling strategy for this producer.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<T>) -> Self {
    self.config.error_strategy = strategy;
    self
  }

  /// Sets the name for this producer.
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = Some(name);
    self
  }
}
