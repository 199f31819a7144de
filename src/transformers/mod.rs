//! Built-in transformers.
//!
//! Transformers are the stream-to-stream stages of a pipeline. The [`uniq`]
//! stage suppresses every record after the first one seen for each distinct
//! value of a configured field.

pub mod uniq;

pub use uniq::uniq_transformer::{UniqConfig, UniqTransformer};
