use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Pulpit";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Question/answer pairs the UI keeps in a session.
pub const MAX_EXCHANGES: usize = 10;

/// Upper bound on messages in a `ConversationHistory`.
pub const MAX_HISTORY_MESSAGES: usize = 2 * MAX_EXCHANGES;

/// Language used whenever a requested code has no table of its own.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Environment variable pointing at a JSON table override file.
pub const TABLES_ENV_VAR: &str = "PULPIT_TABLES";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "pulpit=info,pulpit_lib=info"
}

/// Get the application config directory, if the platform has one.
pub fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pulpit"))
}

/// Resolve the table override file.
///
/// `PULPIT_TABLES` wins; otherwise `<config dir>/pulpit/tables.json` is used
/// when it exists. `None` means the built-in tables apply.
pub fn tables_path() -> Option<PathBuf> {
    tables_path_from(std::env::var_os(TABLES_ENV_VAR).map(PathBuf::from), app_config_dir())
}

fn tables_path_from(env_value: Option<PathBuf>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = env_value.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    config_dir
        .map(|dir| dir.join("tables.json"))
        .filter(|path| path.is_file())
}
