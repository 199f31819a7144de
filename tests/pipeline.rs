use feedweave::consumers::vec::vec_consumer::VecConsumer;
use feedweave::context::Context;
use feedweave::error::{ErrorStrategy, FeedError};
use feedweave::pipeline::PipelineBuilder;
use feedweave::producers::vec::vec_producer::VecProducer;
use feedweave::record::{FeedItem, Record, from_values};
use feedweave::transformer::Transformer;
use feedweave::transformers::uniq::{UniqConfig, UniqTransformer, uniq};
use futures::{StreamExt, stream};
use serde_json::{Value, json};
use std::sync::Once;

static INIT: Once = Once::new();

fn init_tracing() {
  INIT.call_once(|| {
    let _ = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::DEBUG)
      .with_test_writer()
      .try_init();
  });
}

fn record(value: Value) -> Record {
  Record::try_from(value).unwrap()
}

fn feed(values: Vec<Value>) -> Vec<FeedItem> {
  values.into_iter().map(|v| Ok(record(v))).collect()
}

async fn run_uniq_pipeline(input: Vec<FeedItem>, transformer: UniqTransformer) -> Vec<FeedItem> {
  let pipeline = PipelineBuilder::new()
    .producer(VecProducer::new(input).with_name("feed".to_string()))
    .transformer(transformer)
    .consumer(VecConsumer::new().with_name("sink".to_string()));

  let (_, consumer) = pipeline.run().await.unwrap();
  consumer.into_vec()
}

#[tokio::test]
async fn deduplicates_on_configured_field() {
  init_tracing();
  let input = feed(
    (0..5)
      .map(|x| json!({"x": x, "mod": x % 2}))
      .collect(),
  );

  let output = run_uniq_pipeline(input, UniqTransformer::new().with_uniq_key("mod")).await;

  assert_eq!(
    output,
    feed(vec![json!({"x": 0, "mod": 0}), json!({"x": 1, "mod": 1})])
  );
}

#[tokio::test]
async fn default_key_field_is_title() {
  init_tracing();
  let input = feed(
    (0..5)
      .map(|x| json!({"title": x, "mod": x % 2}))
      .collect(),
  );

  // All titles are distinct, so the whole feed passes.
  let output = run_uniq_pipeline(input.clone(), UniqTransformer::new()).await;

  assert_eq!(output, input);
}

#[tokio::test]
async fn engine_resolved_configuration() {
  init_tracing();
  let conf: UniqConfig = serde_json::from_value(json!({"uniq_key": "guid"})).unwrap();
  let transformer = UniqTransformer::from_config(&conf)
    .unwrap()
    .with_context(Context::with_run_id("run-42"));

  let input = feed(vec![
    json!({"guid": "a", "n": 0}),
    json!({"guid": "a", "n": 1}),
    json!({"guid": "b", "n": 2}),
  ]);

  let output = run_uniq_pipeline(input, transformer).await;

  assert_eq!(
    output,
    feed(vec![json!({"guid": "a", "n": 0}), json!({"guid": "b", "n": 2})])
  );
}

#[tokio::test]
async fn empty_configuration_is_rejected() {
  let conf: UniqConfig = serde_json::from_value(json!({"uniq_key": ""})).unwrap();
  assert!(matches!(
    UniqTransformer::from_config(&conf),
    Err(FeedError::Configuration { .. })
  ));

  // Unspecified key falls back to the default.
  let conf: UniqConfig = serde_json::from_value(json!({})).unwrap();
  assert_eq!(conf.uniq_key, "title");
}

#[tokio::test]
async fn malformed_intake_surfaces_input_type_error() {
  init_tracing();
  let input: Vec<FeedItem> =
    from_values(vec![json!({"mod": 0}), json!(42), json!({"mod": 1})]).collect();

  let output = run_uniq_pipeline(input, UniqTransformer::new().with_uniq_key("mod")).await;

  // The stage passes the first record, then propagates the intake error
  // and stops.
  assert_eq!(output.len(), 2);
  assert!(output[0].is_ok());
  assert_eq!(
    output[1],
    Err(FeedError::InputType {
      found: "number".to_string(),
    })
  );
}

#[tokio::test]
async fn skip_strategy_keeps_the_stream_alive() {
  init_tracing();
  let input = feed(vec![
    json!({"mod": 0}),
    json!({"mod": {"nested": true}}),
    json!({"mod": 1}),
  ]);

  let transformer = UniqTransformer::new()
    .with_uniq_key("mod")
    .with_error_strategy(ErrorStrategy::Skip);
  let output = run_uniq_pipeline(input, transformer).await;

  assert_eq!(output, feed(vec![json!({"mod": 0}), json!({"mod": 1})]));
}

#[tokio::test]
async fn bounded_take_on_unbounded_feed() {
  init_tracing();
  let mut transformer = UniqTransformer::new().with_uniq_key("mod");
  let input = stream::iter((0u64..).map(|x| Ok(record(json!({"x": x, "mod": x % 3})))));

  let output: Vec<FeedItem> = transformer
    .transform(Box::pin(input))
    .take(3)
    .collect()
    .await;

  assert_eq!(
    output,
    feed(vec![
      json!({"x": 0, "mod": 0}),
      json!({"x": 1, "mod": 1}),
      json!({"x": 2, "mod": 2}),
    ])
  );
}

#[test]
fn sync_and_async_entry_points_agree() {
  init_tracing();
  let values: Vec<Value> = (0..10).map(|x| json!({"x": x, "mod": x % 4})).collect();
  let records: Vec<Record> = values.iter().cloned().map(record).collect();

  let sync_output: Vec<FeedItem> = uniq(records.clone(), &UniqConfig::new("mod"))
    .unwrap()
    .collect();

  let async_output: Vec<FeedItem> = tokio_test::block_on(async {
    let mut transformer = UniqTransformer::new().with_uniq_key("mod");
    transformer
      .transform(Box::pin(stream::iter(records.into_iter().map(Ok))))
      .collect()
      .await
  });

  assert_eq!(sync_output, async_output);
}
