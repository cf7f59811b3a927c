/// Errors from the external suggestion collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("HTTP error calling {endpoint}: {reason}")]
    Http { endpoint: String, reason: String },

    #[error("LLM API returned {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("LLM response had no content")]
    EmptyResponse,

    #[error("could not read a structured result from the LLM response: {reason}")]
    MalformedResponse { reason: String },

    #[error("missing input: {what}")]
    MissingInput { what: String },
}
