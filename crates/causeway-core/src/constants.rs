// Thresholds, placeholders, and fixed strings shared across crates.

// --- Confidence banding ---
/// Scores strictly above this are banded "high".
pub const HIGH_BAND_THRESHOLD: f64 = 0.7;
/// Scores strictly above this (and not high) are banded "medium".
pub const MEDIUM_BAND_THRESHOLD: f64 = 0.4;

// --- Rendering ---
/// Shown by every formatter when there is nothing to render.
pub const NO_DATA_PLACEHOLDER: &str = "No data available.";

// --- Session defaults ---
pub const DEFAULT_FACTORS: &str = "smoking, lung cancer, exercise habits, air pollution exposure";
pub const DEFAULT_DAG_TEXT: &str = "{}";

// --- Environment ---
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const LOG_ENV: &str = "CAUSEWAY_LOG";

// --- User-facing prompts ---
pub const MISSING_FACTORS_WARNING: &str = "Please enter the relevant factors.";
pub const MISSING_CONTEXT_WARNING: &str =
    "Please ensure treatment, outcome, factors, and domain expertises are provided.";
pub const MISSING_CRITIQUE_CONTEXT_WARNING: &str =
    "Please ensure factors, DAG, and domain expertises are provided.";
pub const RETRY_HINT: &str = "Try again, or simplify the input.";
