//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod app_dirs;
pub mod clipboard;
pub mod file;
pub mod runtime;
pub mod settings;
pub mod trash;

pub use app_dirs::{ensure_log_dir, get_config_dir, get_log_dir};
pub use clipboard::ClipboardService;
pub use file::LocalFileProvider;
pub use runtime::{FsMessage, FsOp, FsRuntime, TaskId};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, get_settings_path, load_settings,
    load_settings_from,
};
pub use trash::TrashService;
