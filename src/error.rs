//! # Error Handling System
//!
//! Error handling for FeedWeave pipelines, covering both the stage-level
//! error taxonomy ([`FeedError`]) and the component-level strategy machinery
//! that decides what a stage does when an item fails.
//!
//! ## Overview
//!
//! - **FeedError**: What went wrong with a feed item: bad configuration,
//!   a key that does not hash to a comparable value, or an input element
//!   that is not a field mapping.
//! - **ErrorAction**: Stop, Skip, or Retry when an error occurs.
//! - **ErrorStrategy**: Configurable per-component policy (Stop, Skip,
//!   Retry, Custom).
//! - **StreamError / ErrorContext / ComponentInfo**: Rich context handed to
//!   custom handlers: timestamp, offending item, component identity.
//! - **PipelineError**: Pipeline-level wrapper with stage information.
//!
//! ## Error Strategies
//!
//! - **Stop**: Immediately stop processing (default; the stream ends after
//!   the error is surfaced, so no partial output is silently swallowed)
//! - **Skip**: Skip the problematic item and continue
//! - **Retry(n)**: Retry up to n times before stopping
//! - **Custom**: User-defined handler function
//!
//! FeedWeave stages surface errors as `Err` items on their output stream and
//! then end it, so the surrounding engine's normal consumption path is also
//! its error-reporting channel.

use chrono;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use thiserror::Error as ThisError;

/// Errors raised while records move through a feed stage.
///
/// All variants are cheap to clone so they can travel as stream items
/// alongside records.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum FeedError {
  /// A stage option resolved to an unusable value.
  ///
  /// Surfaced immediately when the stage is configured or first polled,
  /// never recovered.
  #[error("invalid stage configuration: {reason}")]
  Configuration {
    /// What was wrong with the resolved option value.
    reason: String,
  },

  /// A record's key field did not extract to a hashable, comparable value.
  ///
  /// Scalar field values (null, booleans, numbers, strings) and absent
  /// fields extract to valid keys; arrays and objects do not.
  #[error("field `{field}` does not extract to a comparable key (found {found})")]
  KeyExtraction {
    /// The configured key field name.
    field: String,
    /// The JSON type that was found in the field.
    found: String,
  },

  /// An input element was not a field mapping.
  #[error("feed item is not a field mapping (found {found})")]
  InputType {
    /// The JSON type of the offending element.
    found: String,
  },
}

/// Action to take when an error occurs in a pipeline component.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorAction {
  /// Stop processing immediately when an error occurs.
  ///
  /// The default behavior: the error is surfaced and no further items are
  /// produced.
  Stop,
  /// Skip the item that caused the error and continue processing.
  Skip,
  /// Retry the operation that caused the error.
  Retry,
}

// Type alias for the custom error handler function
type CustomErrorHandler<T> = Arc<dyn Fn(&StreamError<T>) -> ErrorAction + Send + Sync>;

/// Strategy for handling errors in pipeline components.
///
/// Strategies are set per component and consulted each time an item fails.
///
/// # Example
///
/// ```rust
/// use feedweave::error::{ErrorStrategy, ErrorAction};
///
/// // Stop on first error (default)
/// let strategy = ErrorStrategy::<()>::Stop;
///
/// // Skip failing items and continue
/// let strategy = ErrorStrategy::<()>::Skip;
///
/// // Custom error handling
/// let strategy = ErrorStrategy::<()>::new_custom(|error| {
///     if error.retries < 2 {
///         ErrorAction::Retry
///     } else {
///         ErrorAction::Stop
///     }
/// });
/// ```
pub enum ErrorStrategy<T> {
  /// Stop processing immediately when an error occurs.
  Stop,
  /// Skip items that cause errors and continue processing.
  Skip,
  /// Retry failed operations up to the given number of times.
  Retry(usize),
  /// Custom error handling logic.
  Custom(CustomErrorHandler<T>),
}

impl<T: std::fmt::Debug + Clone + Send + Sync> Clone for ErrorStrategy<T> {
  fn clone(&self) -> Self {
    match self {
      ErrorStrategy::Stop => ErrorStrategy::Stop,
      ErrorStrategy::Skip => ErrorStrategy::Skip,
      ErrorStrategy::Retry(n) => ErrorStrategy::Retry(*n),
      ErrorStrategy::Custom(handler) => ErrorStrategy::Custom(handler.clone()),
    }
  }
}

impl<T: std::fmt::Debug + Clone + Send + Sync> fmt::Debug for ErrorStrategy<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ErrorStrategy::Stop => write!(f, "ErrorStrategy::Stop"),
      ErrorStrategy::Skip => write!(f, "ErrorStrategy::Skip"),
      ErrorStrategy::Retry(n) => write!(f, "ErrorStrategy::Retry({})", n),
      ErrorStrategy::Custom(_) => write!(f, "ErrorStrategy::Custom"),
    }
  }
}

impl<T: std::fmt::Debug + Clone + Send + Sync> PartialEq for ErrorStrategy<T> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (ErrorStrategy::Stop, ErrorStrategy::Stop) => true,
      (ErrorStrategy::Skip, ErrorStrategy::Skip) => true,
      (ErrorStrategy::Retry(n1), ErrorStrategy::Retry(n2)) => n1 == n2,
      (ErrorStrategy::Custom(_), ErrorStrategy::Custom(_)) => true,
      _ => false,
    }
  }
}

impl<T: std::fmt::Debug + Clone + Send + Sync> ErrorStrategy<T> {
  /// Creates a custom error handling strategy from a handler function.
  ///
  /// # Arguments
  ///
  /// * `f` - A function that inspects a `StreamError` and returns the
  ///   `ErrorAction` to take.
  pub fn new_custom<F>(f: F) -> Self
  where
    F: Fn(&StreamError<T>) -> ErrorAction + Send + Sync + 'static,
  {
    Self::Custom(Arc::new(f))
  }
}

/// Error that occurred during stream processing.
///
/// Carries the original error together with context about where and when it
/// occurred and how often it has been retried.
#[derive(Debug)]
pub struct StreamError<T> {
  /// The original error that occurred.
  pub source: Box<dyn Error + Send + Sync>,
  /// Context about when and where the error occurred.
  pub context: ErrorContext<T>,
  /// Information about the component that encountered the error.
  pub component: ComponentInfo,
  /// Number of times this error has been retried.
  pub retries: usize,
}

impl<T: std::fmt::Debug + Clone + Send + Sync> Clone for StreamError<T> {
  fn clone(&self) -> Self {
    Self {
      source: Box::new(StringError(self.source.to_string())),
      context: self.context.clone(),
      component: self.component.clone(),
      retries: self.retries,
    }
  }
}

/// A simple error type that wraps a string message.
#[derive(Debug)]
pub struct StringError(
  /// The wrapped message.
  pub String,
);

impl std::fmt::Display for StringError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl std::error::Error for StringError {}

impl<T: std::fmt::Debug + Clone + Send + Sync> StreamError<T> {
  /// Creates a new `StreamError` with `retries` set to 0.
  ///
  /// # Arguments
  ///
  /// * `source` - The original error that occurred.
  /// * `context` - Context about when and where the error occurred.
  /// * `component` - Information about the component that encountered the error.
  pub fn new(
    source: Box<dyn Error + Send + Sync>,
    context: ErrorContext<T>,
    component: ComponentInfo,
  ) -> Self {
    Self {
      source,
      context,
      component,
      retries: 0,
    }
  }
}

impl<T: std::fmt::Debug + Clone + Send + Sync> fmt::Display for StreamError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Error in {} ({}): {}",
      self.component.name, self.component.type_name, self.source
    )
  }
}

impl<T: std::fmt::Debug + Clone + Send + Sync> Error for StreamError<T> {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(self.source.as_ref())
  }
}

/// Context information about when and where an error occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext<T> {
  /// The timestamp when the error occurred.
  pub timestamp: chrono::DateTime<chrono::Utc>,
  /// The item being processed when the error occurred, if available.
  pub item: Option<T>,
  /// The name of the component that encountered the error.
  pub component_name: String,
  /// The type of the component that encountered the error.
  pub component_type: String,
}

impl<T: std::fmt::Debug + Clone + Send + Sync> Default for ErrorContext<T> {
  fn default() -> Self {
    Self {
      timestamp: chrono::Utc::now(),
      item: None,
      component_name: "default".to_string(),
      component_type: "default".to_string(),
    }
  }
}

/// Information about a pipeline component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInfo {
  /// The name of the component.
  pub name: String,
  /// The type name of the component.
  pub type_name: String,
}

impl Default for ComponentInfo {
  fn default() -> Self {
    Self {
      name: "default".to_string(),
      type_name: "default".to_string(),
    }
  }
}

impl ComponentInfo {
  /// Creates a new `ComponentInfo` with the given name and type name.
  pub fn new(name: String, type_name: String) -> Self {
    Self { name, type_name }
  }
}

/// An error that occurred during pipeline execution.
///
/// Wraps a `StreamError` and adds pipeline-level reporting.
#[derive(Debug)]
pub struct PipelineError<T> {
  inner: StreamError<T>,
}

impl<T: std::fmt::Debug + Clone + Send + Sync> PipelineError<T> {
  /// Creates a new `PipelineError` from an error, context, and component information.
  pub fn new<E>(error: E, context: ErrorContext<T>, component: ComponentInfo) -> Self
  where
    E: Error + Send + Sync + 'static,
  {
    Self {
      inner: StreamError::new(Box::new(error), context, component),
    }
  }

  /// Creates a new `PipelineError` from an existing `StreamError`.
  pub fn from_stream_error(error: StreamError<T>) -> Self {
    Self { inner: error }
  }

  /// Returns a reference to the error context.
  pub fn context(&self) -> &ErrorContext<T> {
    &self.inner.context
  }

  /// Returns a reference to the component information.
  pub fn component(&self) -> &ComponentInfo {
    &self.inner.component
  }
}

impl<T: std::fmt::Debug + Clone + Send + Sync> std::fmt::Display for PipelineError<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "Pipeline error in {}: {}",
      self.inner.component.name, self.inner.source
    )
  }
}

impl<T: std::fmt::Debug + Clone + Send + Sync> Error for PipelineError<T> {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(&*self.inner.source)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn feed_error_display() {
    let error = FeedError::KeyExtraction {
      field: "mod".to_string(),
      found: "array".to_string(),
    };
    assert_eq!(
      error.to_string(),
      "field `mod` does not extract to a comparable key (found array)"
    );

    let error = FeedError::InputType {
      found: "number".to_string(),
    };
    assert_eq!(
      error.to_string(),
      "feed item is not a field mapping (found number)"
    );
  }

  #[test]
  fn error_strategy_equality() {
    assert_eq!(ErrorStrategy::<()>::Stop, ErrorStrategy::<()>::Stop);
    assert_eq!(ErrorStrategy::<()>::Retry(3), ErrorStrategy::<()>::Retry(3));
    assert_ne!(ErrorStrategy::<()>::Retry(3), ErrorStrategy::<()>::Retry(4));
    assert_ne!(ErrorStrategy::<()>::Stop, ErrorStrategy::<()>::Skip);
  }

  #[test]
  fn stream_error_clone_keeps_message() {
    let error: StreamError<i32> = StreamError::new(
      Box::new(FeedError::Configuration {
        reason: "uniq_key must be a non-empty field name".to_string(),
      }),
      ErrorContext::default(),
      ComponentInfo::new("uniq".to_string(), "UniqTransformer".to_string()),
    );
    let cloned = error.clone();
    assert_eq!(cloned.source.to_string(), error.source.to_string());
    assert_eq!(cloned.component, error.component);
  }
}
