use crate::error::FeedError;
use crate::record::{FeedItem, Record};
use crate::transformers::uniq::uniq_transformer::{SeenSet, UniqConfig};

/// Synchronous entry point: deduplicates a record feed lazily.
///
/// Validates the configuration up front, then returns the [`Uniq`] iterator
/// adapter. Nothing is pulled from `feed` until the adapter is iterated,
/// and at most one input record is consumed per output decision, so
/// infinite feeds are supported.
///
/// Identical semantics to
/// [`UniqTransformer`](crate::transformers::uniq::UniqTransformer), which
/// adapts the same decision kernel to async streams.
///
/// # Example
///
/// ```rust
/// use feedweave::record::Record;
/// use feedweave::transformers::uniq::{UniqConfig, uniq};
/// use serde_json::json;
///
/// # fn main() -> Result<(), feedweave::error::FeedError> {
/// let feed: Vec<Record> = (0..5)
///     .map(|x| Record::try_from(json!({"x": x, "mod": x % 2})).unwrap())
///     .collect();
///
/// let kept: Vec<Record> = uniq(feed, &UniqConfig::new("mod"))?
///     .collect::<Result<_, _>>()?;
/// assert_eq!(kept.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn uniq<I>(feed: I, config: &UniqConfig) -> Result<Uniq<I::IntoIter>, FeedError>
where
  I: IntoIterator<Item = Record>,
{
  config.validate()?;
  Ok(Uniq {
    input: feed.into_iter(),
    uniq_key: config.uniq_key.clone(),
    seen: SeenSet::new(),
    failed: false,
  })
}

/// Lazy iterator adapter that keeps the first record per distinct key.
///
/// Yields `Ok` for each passing record. A key-extraction failure yields one
/// `Err` and fuses the iterator: the whole run fails rather than silently
/// dropping the offending record.
#[derive(Debug)]
pub struct Uniq<I> {
  input: I,
  uniq_key: String,
  seen: SeenSet,
  failed: bool,
}

impl<I> Uniq<I> {
  /// Returns the number of distinct keys observed so far.
  pub fn seen_len(&self) -> usize {
    self.seen.len()
  }
}

impl<I> Iterator for Uniq<I>
where
  I: Iterator<Item = Record>,
{
  type Item = FeedItem;

  fn next(&mut self) -> Option<Self::Item> {
    if self.failed {
      return None;
    }
    loop {
      let record = self.input.next()?;
      match self.seen.admit(&record, &self.uniq_key) {
        Ok(true) => return Some(Ok(record)),
        Ok(false) => continue,
        Err(error) => {
          self.failed = true;
          return Some(Err(error));
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;
  use serde_json::{Value, json};

  fn record(value: Value) -> Record {
    Record::try_from(value).unwrap()
  }

  fn run(feed: Vec<Record>, key: &str) -> Vec<FeedItem> {
    uniq(feed, &UniqConfig::new(key)).unwrap().collect()
  }

  fn records_or_panic(items: Vec<FeedItem>) -> Vec<Record> {
    items.into_iter().map(|item| item.unwrap()).collect()
  }

  #[test]
  fn keeps_first_record_per_key() {
    let feed: Vec<Record> = (0..5)
      .map(|x| record(json!({"x": x, "mod": x % 2})))
      .collect();

    let kept = records_or_panic(run(feed, "mod"));

    assert_eq!(
      kept,
      vec![
        record(json!({"x": 0, "mod": 0})),
        record(json!({"x": 1, "mod": 1})),
      ]
    );
  }

  #[test]
  fn empty_feed_yields_nothing() {
    assert!(run(Vec::new(), "title").is_empty());
  }

  #[test]
  fn empty_key_is_rejected_up_front() {
    let result = uniq(Vec::<Record>::new(), &UniqConfig::new(""));
    assert!(matches!(result, Err(FeedError::Configuration { .. })));
  }

  #[test]
  fn extraction_failure_fuses_the_iterator() {
    let feed = vec![
      record(json!({"x": 0, "mod": 0})),
      record(json!({"x": 1, "mod": ["not", "hashable"]})),
      record(json!({"x": 2, "mod": 1})),
    ];

    let mut iter = uniq(feed, &UniqConfig::new("mod")).unwrap();
    assert!(iter.next().unwrap().is_ok());
    assert!(iter.next().unwrap().is_err());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
  }

  #[test]
  fn infinite_feed_stays_lazy() {
    let feed = (0u64..).map(|x| record(json!({"x": x, "mod": x % 2})));
    let mut iter = Uniq {
      input: feed,
      uniq_key: "mod".to_string(),
      seen: SeenSet::new(),
      failed: false,
    };

    assert_eq!(iter.next(), Some(Ok(record(json!({"x": 0, "mod": 0})))));
    assert_eq!(iter.next(), Some(Ok(record(json!({"x": 1, "mod": 1})))));
    assert_eq!(iter.seen_len(), 2);
  }

  // Feeds of small keyed records; narrow key range to force duplicates.
  fn keyed_feed() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(0i64..6, 0..40).prop_map(|keys| {
      keys
        .into_iter()
        .enumerate()
        .map(|(position, key)| record(json!({"title": key, "position": position})))
        .collect()
    })
  }

  proptest! {
    #[test]
    fn output_is_an_order_preserving_subsequence(feed in keyed_feed()) {
      let kept = records_or_panic(run(feed.clone(), "title"));

      prop_assert!(kept.len() <= feed.len());
      let mut feed_iter = feed.iter();
      for passed in &kept {
        // Subsequence check: every kept record occurs in the remaining
        // input, in order.
        prop_assert!(feed_iter.any(|original| original == passed));
      }
    }

    #[test]
    fn exactly_one_record_per_distinct_key(feed in keyed_feed()) {
      let kept = records_or_panic(run(feed.clone(), "title"));

      let input_keys: Vec<_> = feed
        .iter()
        .map(|r| r.key_value("title").unwrap())
        .collect();
      let kept_keys: Vec<_> = kept
        .iter()
        .map(|r| r.key_value("title").unwrap())
        .collect();

      // Each distinct input key appears exactly once in the output, and
      // the record carrying it is the earliest input occurrence.
      for key in &input_keys {
        prop_assert_eq!(kept_keys.iter().filter(|k| *k == key).count(), 1);
      }
      for kept_record in &kept {
        let key = kept_record.key_value("title").unwrap();
        let first = feed
          .iter()
          .find(|r| r.key_value("title").unwrap() == key)
          .unwrap();
        prop_assert_eq!(first, kept_record);
      }
    }

    #[test]
    fn dedup_is_idempotent(feed in keyed_feed()) {
      let once = records_or_panic(run(feed, "title"));
      let twice = records_or_panic(run(once.clone(), "title"));
      prop_assert_eq!(once, twice);
    }

    #[test]
    fn all_distinct_keys_pass_untouched(count in 0usize..30) {
      let feed: Vec<Record> = (0..count)
        .map(|x| record(json!({"title": x})))
        .collect();
      let kept = records_or_panic(run(feed.clone(), "title"));
      prop_assert_eq!(kept, feed);
    }
  }
}
