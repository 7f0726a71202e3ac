/// Model requested from the inference server when none is configured
pub const DEFAULT_MODEL: &str = "llama3.2:1b";

/// Ollama base URL used when none is configured
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Timeout for the `/api/tags` health probe
pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 10;

/// Timeout for a single non-streaming generation call
pub const DEFAULT_GENERATE_TIMEOUT_SECS: u64 = 120;

/// Format of the `time` field on every chat turn
pub const TURN_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Longest accepted username (it ends up in a file name)
pub const MAX_USERNAME_LEN: usize = 64;

/// Longest trip, in days, a single itinerary request may cover
pub const MAX_TRIP_DAYS: u64 = 60;

/// Sessions unused for this long are signed out (12 hours)
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 12 * 60 * 60;

// =============================================================================
// Data files
// =============================================================================

/// Credential document, relative to the data directory
pub const USERS_FILE: &str = "users.json";

/// Prefix of per-user chat documents: `chats_<username>.json`
pub const CHAT_FILE_PREFIX: &str = "chats_";

/// Prefix of per-user history exports: `export_chat_<username>.json`
pub const EXPORT_FILE_PREFIX: &str = "export_chat_";

// =============================================================================
// Error Messages
// =============================================================================

/// Registration with an empty username or password
pub const ERR_MISSING_CREDENTIALS: &str = "Fill both fields.";

/// Username with characters that are not safe in a file name
pub const ERR_INVALID_USERNAME: &str =
    "Username may only contain letters, digits, '-', '_' and '.', and must not start with '.'";

/// Trip submitted without origin or destination
pub const ERR_MISSING_PLACES: &str = "Please fill origin and destination.";

/// Trip whose end date precedes its start date
pub const ERR_DATE_ORDER: &str = "End date must be after or equal to start date.";

/// Trip longer than `MAX_TRIP_DAYS`
pub const ERR_TRIP_TOO_LONG: &str = "Trips are limited to 60 days.";
