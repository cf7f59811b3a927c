//! Output-shape normalization for raw LLM responses.

mod decode;
mod names;
mod normalizer;

pub use decode::{decode, Entry, Item, RawShape, Scalar};
pub use names::display_name;
pub use normalizer::{normalize, NormalizeMode};
