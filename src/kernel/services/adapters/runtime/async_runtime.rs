use super::message::{FsMessage, FsOp, TaskId};
use crate::kernel::error::ActionError;
use crate::kernel::services::ports::FileProvider;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Runs slow copy/move work off the UI thread. Each submission becomes one
/// blocking job and reports back with one [`FsMessage`].
pub struct FsRuntime {
    runtime: tokio::runtime::Runtime,
    fs: Arc<dyn FileProvider>,
    tx: Sender<FsMessage>,
    next_task: AtomicU64,
}

impl FsRuntime {
    pub fn new(fs: Arc<dyn FileProvider>, tx: Sender<FsMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("zside-fs")
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create fs runtime");
                e
            })?;
        Ok(Self {
            runtime,
            fs,
            tx,
            next_task: AtomicU64::new(1),
        })
    }

    pub fn duplicate(&self, from: PathBuf, to: PathBuf) -> TaskId {
        self.submit(FsOp::Duplicate, from, to)
    }

    pub fn move_path(&self, from: PathBuf, to: PathBuf) -> TaskId {
        self.submit(FsOp::Move, from, to)
    }

    fn submit(&self, op: FsOp, from: PathBuf, to: PathBuf) -> TaskId {
        let task = TaskId(self.next_task.fetch_add(1, Ordering::Relaxed));
        let tx = self.tx.clone();
        let fs = Arc::clone(&self.fs);

        tracing::debug!(
            task = %task,
            op = op.name(),
            from = %from.display(),
            to = %to.display(),
            "submit fs task"
        );

        self.runtime.spawn(async move {
            let from_for_work = from.clone();
            let to_for_work = to.clone();
            let result = tokio::task::spawn_blocking(move || {
                run_fs_op(fs.as_ref(), op, &from_for_work, &to_for_work)
            })
            .await;

            let msg = match result {
                Ok(Ok(is_dir)) => match op {
                    FsOp::Duplicate => FsMessage::Duplicated {
                        task,
                        from,
                        to,
                        is_dir,
                    },
                    FsOp::Move => FsMessage::Moved {
                        task,
                        from,
                        to,
                        is_dir,
                    },
                },
                Ok(Err(error)) => FsMessage::Failed {
                    task,
                    op,
                    from,
                    to,
                    error,
                },
                Err(e) => FsMessage::Failed {
                    task,
                    op,
                    from,
                    to,
                    error: ActionError::Unknown(e.to_string()),
                },
            };

            if tx.send(msg).is_err() {
                tracing::warn!(task = %task, "fs message channel closed");
            }
        });

        task
    }
}

/// Returns whether the source was a directory.
pub(crate) fn run_fs_op(
    fs: &dyn FileProvider,
    op: FsOp,
    from: &Path,
    to: &Path,
) -> Result<bool, ActionError> {
    if fs.exists(to) {
        return Err(ActionError::Conflict(to.to_path_buf()));
    }
    fs.ensure_parent(to)?;

    let is_dir = fs.is_dir(from);
    match op {
        FsOp::Duplicate if is_dir => fs.copy_dir(from, to)?,
        FsOp::Duplicate => fs.copy_file(from, to)?,
        FsOp::Move => fs.move_path(from, to)?,
    }
    Ok(is_dir)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
