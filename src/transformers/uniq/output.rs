use crate::output::Output;
use crate::record::FeedItem;
use crate::transformers::uniq::uniq_transformer::UniqTransformer;
use futures::Stream;
use std::pin::Pin;

impl Output for UniqTransformer {
  type Output = FeedItem;
  type OutputStream = Pin<Box<dyn Stream<Item = FeedItem> + Send>>;
}
