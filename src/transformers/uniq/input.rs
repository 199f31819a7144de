use crate::input::Input;
use crate::record::FeedItem;
use crate::transformers::uniq::uniq_transformer::UniqTransformer;
use futures::Stream;
use std::pin::Pin;

impl Input for UniqTransformer {
  type Input = FeedItem;
  type InputStream = Pin<Box<dyn Stream<Item = FeedItem> + Send>>;
}
