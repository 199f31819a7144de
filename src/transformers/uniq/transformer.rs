use crate::error::{ComponentInfo, ErrorAction, ErrorContext, ErrorStrategy, FeedError, StreamError};
use crate::record::{FeedItem, Record};
use crate::transformer::{Transformer, TransformerConfig};
use crate::transformers::uniq::uniq_transformer::{SeenSet, UniqTransformer};
use futures::StreamExt;
use tracing::{trace, warn};

/// Resolves the action for a record whose key failed to extract.
///
/// Key extraction is deterministic, so `Retry` cannot succeed and is
/// treated as `Stop`.
fn extraction_error_action(
  strategy: &ErrorStrategy<FeedItem>,
  component: &ComponentInfo,
  error: &FeedError,
  record: &Record,
) -> ErrorAction {
  match strategy {
    ErrorStrategy::Skip => ErrorAction::Skip,
    ErrorStrategy::Stop | ErrorStrategy::Retry(_) => ErrorAction::Stop,
    ErrorStrategy::Custom(handler) => {
      let stream_error = StreamError::new(
        Box::new(error.clone()),
        ErrorContext {
          timestamp: chrono::Utc::now(),
          item: Some(Ok(record.clone())),
          component_name: component.name.clone(),
          component_type: component.type_name.clone(),
        },
        component.clone(),
      );
      handler(&stream_error)
    }
  }
}

impl Transformer for UniqTransformer {
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let field = self.uniq_key.clone();
    let strategy = self.config.error_strategy();
    let component = self.component_info();

    if field.is_empty() {
      let error = FeedError::Configuration {
        reason: "uniq_key must be a non-empty field name".to_string(),
      };
      return Box::pin(futures::stream::once(async move { Err(error) }));
    }

    Box::pin(async_stream::stream! {
      // One seen-set per returned stream: invocations never share state.
      let mut seen = SeenSet::new();
      let mut input = input;

      while let Some(item) = input.next().await {
        match item {
          Ok(record) => match seen.admit(&record, &field) {
            Ok(true) => {
              yield Ok(record);
            }
            Ok(false) => {
              trace!(field = %field, "suppressed duplicate record");
            }
            Err(error) => {
              match extraction_error_action(&strategy, &component, &error, &record) {
                ErrorAction::Skip => {
                  warn!(field = %field, %error, "skipping record that failed key extraction");
                }
                _ => {
                  yield Err(error);
                  break;
                }
              }
            }
          },
          // Upstream failures end this stage's output as well.
          Err(error) => {
            yield Err(error);
            break;
          }
        }
      }
    })
  }

  fn set_config_impl(&mut self, config: TransformerConfig<FeedItem>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &TransformerConfig<FeedItem> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig<FeedItem> {
    &mut self.config
  }
}
