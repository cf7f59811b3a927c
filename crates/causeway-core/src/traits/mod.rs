//! Seams to external collaborators.

mod suggester;

pub use suggester::ICausalSuggester;
