use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_FILTER: &str = "zside=info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ask before sending paths to the trash.
    pub confirm_delete: bool,
    /// Open a file right after "New File" created it.
    pub open_created_files: bool,
    /// Open a duplicated file once the copy finished.
    pub open_duplicated_files: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confirm_delete: true,
            open_created_files: true,
            open_duplicated_files: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
