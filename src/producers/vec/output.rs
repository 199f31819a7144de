use crate::output::Output;
use crate::producers::vec::vec_producer::VecProducer;
use futures::Stream;
use std::pin::Pin;

impl<T> Output for VecProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = Pin<Box<dyn Stream<Item = T> + Send>>;
}
