// Single source of truth for all default values.

// --- LLM ---
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_RETRIES: u32 = 0;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_TEMPERATURE: f64 = 0.0;

// --- Display ---
pub const DEFAULT_OUTPUT_FORMAT: &str = "text";
pub const DEFAULT_SHOW_SCORES: bool = true;
pub const DEFAULT_TITLE_CASE_NAMES: bool = true;

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "causeway.toml";
pub const USER_CONFIG_DIR: &str = ".causeway";
