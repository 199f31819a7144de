use crate::consumer::{Consumer, ConsumerConfig};
use crate::consumers::vec::vec_consumer::VecConsumer;
use async_trait::async_trait;
use futures::StreamExt;
use tracing::debug;

#[async_trait]
impl<T> Consumer for VecConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  async fn consume(&mut self, mut stream: Self::InputStream) {
    let mut count = 0usize;
    while let Some(value) = stream.next().await {
      count += 1;
      self.vec.push(value);
    }
    debug!(
      consumer = %self.component_info().name,
      items = count,
      "finished consuming stream"
    );
  }

  fn set_config_impl(&mut self, config: ConsumerConfig<T>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &ConsumerConfig<T> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut ConsumerConfig<T> {
    &mut self.config
  }
}
