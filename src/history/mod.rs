pub mod storage;
pub mod types;

pub use storage::{
    export_history, get_history_path, load_history, save_history, DEFAULT_EXPORT_FILE,
    HISTORY_FILE,
};
pub use types::{History, Snapshot, MAX_HISTORY};
