use crate::errors::CausewayResult;
use crate::models::SuggestionRequest;

/// The external reasoning backend.
///
/// Implementations receive validated strings and lists and may return any JSON
/// shape; callers never assume a fixed schema and normalize the result.
pub trait ICausalSuggester {
    /// Perform exactly one suggestion call.
    fn suggest(&self, request: &SuggestionRequest) -> CausewayResult<serde_json::Value>;

    /// Backend name for logs (typically the model name).
    fn name(&self) -> &str;
}

impl<T: ICausalSuggester + ?Sized> ICausalSuggester for &T {
    fn suggest(&self, request: &SuggestionRequest) -> CausewayResult<serde_json::Value> {
        (**self).suggest(request)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: ICausalSuggester + ?Sized> ICausalSuggester for Box<T> {
    fn suggest(&self, request: &SuggestionRequest) -> CausewayResult<serde_json::Value> {
        (**self).suggest(request)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
