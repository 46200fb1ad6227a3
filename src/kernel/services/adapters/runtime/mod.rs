//! Background runtime adapter: runs duplicate/move jobs and sends results back to the UI thread.

mod async_runtime;
mod message;

pub use async_runtime::FsRuntime;
pub(crate) use async_runtime::run_fs_op;
pub use message::{FsMessage, FsOp, TaskId};
