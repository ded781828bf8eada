/// Prefix applied to setting keys when they are read from environment variables
pub const DEFAULT_ENV_PREFIX: &str = "SHOPFRONT_";

/// Separator used when nested configuration objects are flattened into keys
pub const KEY_PATH_SEPARATOR: char = '.';
