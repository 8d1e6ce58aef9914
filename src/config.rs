use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "ClinicalReports";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of the reporting window when the caller gives no start date.
pub const DEFAULT_WINDOW_MONTHS: u32 = 6;

/// Entries kept in a symptom report's "most common" list.
pub const MOST_COMMON_SYMPTOMS_LIMIT: usize = 10;

/// Overrides the database location.
pub const DATABASE_PATH_ENV: &str = "CLINICAL_REPORTS_DB";
/// Overrides the HTTP listen address.
pub const BIND_ADDRESS_ENV: &str = "CLINICAL_REPORTS_BIND";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

const DATABASE_FILE: &str = "records.db";

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "clinical_reports=debug,tower_http=debug,info"
    } else {
        "clinical_reports=info,warn"
    }
}

/// Get the application data directory
/// ~/ClinicalReports/, or the working directory when no home is known.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Database file, honouring `CLINICAL_REPORTS_DB`.
pub fn database_path() -> PathBuf {
    database_path_from(std::env::var_os(DATABASE_PATH_ENV).map(PathBuf::from))
}

fn database_path_from(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| app_data_dir().join(DATABASE_FILE))
}

/// Listen address, honouring `CLINICAL_REPORTS_BIND`.
pub fn bind_address() -> String {
    std::env::var(BIND_ADDRESS_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
}
