use crate::producer::{Producer, ProducerConfig};
use crate::producers::vec::vec_producer::VecProducer;
use futures::stream;

impl<T> Producer for VecProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn produce(&mut self) -> Self::OutputStream {
    Box::pin(stream::iter(self.data.clone()))
  }

  fn set_config_impl(&mut self, config: ProducerConfig<Self::Output>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &ProducerConfig<Self::Output> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut ProducerConfig<Self::Output> {
    &mut self.config
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ErrorStrategy;
  use futures::StreamExt;

  #[tokio::test]
  async fn test_vec_producer_basic() {
    let mut producer = VecProducer::new(vec![1, 2, 3]);
    let result: Vec<i32> = producer.produce().collect().await;
    assert_eq!(result, vec![1, 2, 3]);
  }

  #[tokio::test]
  async fn test_vec_producer_replay() {
    let mut producer = VecProducer::new(vec!["a", "b"]);
    let first: Vec<&str> = producer.produce().collect().await;
    let second: Vec<&str> = producer.produce().collect().await;
    assert_eq!(first, second);
  }

  #[tokio::test]
  async fn test_vec_producer_empty() {
    let mut producer = VecProducer::<i32>::new(Vec::new());
    let result: Vec<i32> = producer.produce().collect().await;
    assert!(result.is_empty());
  }

  #[test]
  fn test_error_handling_strategies() {
    let producer = VecProducer::new(vec![1])
      .with_error_strategy(ErrorStrategy::<i32>::Skip)
      .with_name("test_producer".to_string());

    assert_eq!(producer.config.error_strategy, ErrorStrategy::<i32>::Skip);
    assert_eq!(producer.config.name, Some("test_producer".to_string()));
  }
}
