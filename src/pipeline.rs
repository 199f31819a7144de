//! # Pipeline Builder
//!
//! The thinnest shim around stage composition: one producer, any number of
//! transformers, one consumer, connected in order and driven by
//! [`Pipeline::run`]. The builder holds typed references to the stages and
//! invokes them directly; there is no dynamic registration.
//!
//! ## Example
//!
//! ```rust,no_run
//! use feedweave::pipeline::PipelineBuilder;
//! use feedweave::producers::vec::vec_producer::VecProducer;
//! use feedweave::consumers::vec::vec_consumer::VecConsumer;
//! use feedweave::transformers::uniq::UniqTransformer;
//! use feedweave::record::FeedItem;
//!
//! # async fn example(feed: Vec<FeedItem>) {
//! let pipeline = PipelineBuilder::new()
//!     .producer(VecProducer::new(feed))
//!     .transformer(UniqTransformer::new().with_uniq_key("guid"))
//!     .consumer(VecConsumer::new());
//!
//! let (_, consumer) = pipeline.run().await.unwrap();
//! let output = consumer.into_vec();
//! # }
//! ```

use crate::error::{ErrorStrategy, PipelineError};
use crate::{consumer::Consumer, producer::Producer, transformer::Transformer};
use std::marker::PhantomData;
use tracing::debug;

/// Builder state: no stages attached yet.
pub struct Empty;
/// Builder state: a producer is attached.
pub struct HasProducer<P>(PhantomData<P>);
/// Builder state: a producer and at least one transformer are attached.
pub struct HasTransformer<P, T>(PhantomData<(P, T)>);

/// Pipeline builder that connects stages as they are attached.
///
/// Streams are created eagerly at attachment time but remain lazy: nothing
/// flows until the pipeline is run and the consumer polls.
pub struct PipelineBuilder<State> {
  producer_stream: Option<Box<dyn std::any::Any + Send + 'static>>,
  transformer_stream: Option<Box<dyn std::any::Any + Send + 'static>>,
  error_strategy: ErrorStrategy<()>,
  _state: State,
}

/// A fully composed pipeline, ready to run.
pub struct Pipeline<P, T, C>
where
  P: Producer,
  T: Transformer,
  C: Consumer,
  P::Output: std::fmt::Debug + Clone + Send + Sync + 'static,
  T::Input: std::fmt::Debug + Clone + Send + Sync + 'static,
  T::Output: std::fmt::Debug + Clone + Send + Sync + 'static,
  C::Input: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  transformer_stream: Option<T::OutputStream>,
  consumer: Option<C>,
  error_strategy: ErrorStrategy<()>,
  _producer: PhantomData<P>,
}

impl PipelineBuilder<Empty> {
  /// Creates a builder with no stages attached.
  pub fn new() -> Self {
    PipelineBuilder {
      producer_stream: None,
      transformer_stream: None,
      error_strategy: ErrorStrategy::Stop,
      _state: Empty,
    }
  }

  /// Sets the pipeline-level error handling strategy.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<()>) -> Self {
    self.error_strategy = strategy;
    self
  }

  /// Attaches the producer that originates the pipeline's stream.
  pub fn producer<P>(self, mut producer: P) -> PipelineBuilder<HasProducer<P>>
  where
    P: Producer + 'static,
    P::Output: std::fmt::Debug + Clone + Send + Sync + 'static,
    P::OutputStream: 'static,
  {
    debug!(producer = %producer.component_info().name, "attaching producer");
    let stream = producer.produce();

    PipelineBuilder {
      producer_stream: Some(Box::new(stream)),
      transformer_stream: None,
      error_strategy: self.error_strategy,
      _state: HasProducer(PhantomData),
    }
  }
}

impl Default for PipelineBuilder<Empty> {
  fn default() -> Self {
    Self::new()
  }
}

impl<P> PipelineBuilder<HasProducer<P>>
where
  P: Producer + 'static,
  P::Output: std::fmt::Debug + Clone + Send + Sync + 'static,
  P::OutputStream: 'static,
{
  /// Attaches the first transformer, connecting it to the producer.
  pub fn transformer<T>(mut self, mut transformer: T) -> PipelineBuilder<HasTransformer<P, T>>
  where
    T: Transformer + 'static,
    T::Input: std::fmt::Debug + Clone + Send + Sync + 'static,
    T::Output: std::fmt::Debug + Clone + Send + Sync + 'static,
    T::InputStream: From<P::OutputStream>,
    T::OutputStream: 'static,
  {
    debug!(transformer = %transformer.component_info().name, "attaching transformer");
    let producer_stream = self
      .producer_stream
      .take()
      .unwrap()
      .downcast::<P::OutputStream>()
      .unwrap();

    let transformer_stream = transformer.transform((*producer_stream).into());

    PipelineBuilder {
      producer_stream: None,
      transformer_stream: Some(Box::new(transformer_stream)),
      error_strategy: self.error_strategy,
      _state: HasTransformer(PhantomData),
    }
  }
}

impl<P, T> PipelineBuilder<HasTransformer<P, T>>
where
  P: Producer + 'static,
  T: Transformer + 'static,
  P::Output: std::fmt::Debug + Clone + Send + Sync + 'static,
  T::Input: std::fmt::Debug + Clone + Send + Sync + 'static,
  T::Output: std::fmt::Debug + Clone + Send + Sync + 'static,
  T::OutputStream: 'static,
{
  /// Attaches a further transformer, connecting it to the previous one.
  pub fn transformer<U>(mut self, mut transformer: U) -> PipelineBuilder<HasTransformer<P, U>>
  where
    U: Transformer + 'static,
    U::Input: std::fmt::Debug + Clone + Send + Sync + 'static,
    U::Output: std::fmt::Debug + Clone + Send + Sync + 'static,
    U::InputStream: From<T::OutputStream>,
    U::OutputStream: 'static,
  {
    debug!(transformer = %transformer.component_info().name, "attaching transformer");
    let transformer_stream = self
      .transformer_stream
      .take()
      .unwrap()
      .downcast::<T::OutputStream>()
      .unwrap();

    let new_stream = transformer.transform((*transformer_stream).into());

    PipelineBuilder {
      producer_stream: None,
      transformer_stream: Some(Box::new(new_stream)),
      error_strategy: self.error_strategy,
      _state: HasTransformer(PhantomData),
    }
  }

  /// Attaches the consumer, completing the pipeline.
  pub fn consumer<C>(mut self, consumer: C) -> Pipeline<P, T, C>
  where
    C: Consumer + 'static,
    C::Input: std::fmt::Debug + Clone + Send + Sync + 'static,
    C::InputStream: From<T::OutputStream>,
  {
    let transformer_stream = self
      .transformer_stream
      .take()
      .unwrap()
      .downcast::<T::OutputStream>()
      .unwrap();

    Pipeline {
      transformer_stream: Some(*transformer_stream),
      consumer: Some(consumer),
      error_strategy: self.error_strategy,
      _producer: PhantomData,
    }
  }
}

impl<P, T, C> Pipeline<P, T, C>
where
  P: Producer,
  T: Transformer,
  C: Consumer,
  P::Output: std::fmt::Debug + Clone + Send + Sync + 'static,
  T::Input: std::fmt::Debug + Clone + Send + Sync + 'static,
  T::Output: std::fmt::Debug + Clone + Send + Sync + 'static,
  C::Input: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Sets the pipeline-level error handling strategy.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<()>) -> Self {
    self.error_strategy = strategy;
    self
  }

  /// Drives the pipeline: the consumer drains the composed stream.
  ///
  /// Returns the consumer so collected output can be recovered.
  pub async fn run(mut self) -> Result<((), C), PipelineError<()>>
  where
    C::InputStream: From<T::OutputStream>,
  {
    let transformer_stream = self.transformer_stream.take().unwrap();
    let mut consumer = self.consumer.take().unwrap();

    debug!(strategy = ?self.error_strategy, "running pipeline");
    consumer.consume(transformer_stream.into()).await;
    Ok(((), consumer))
  }
}
