use crate::kernel::error::ActionError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    Duplicate,
    Move,
}

impl FsOp {
    pub fn name(self) -> &'static str {
        match self {
            FsOp::Duplicate => "duplicate",
            FsOp::Move => "move",
        }
    }
}

/// Exactly one message is sent per submitted task.
#[derive(Debug)]
pub enum FsMessage {
    Duplicated {
        task: TaskId,
        from: PathBuf,
        to: PathBuf,
        is_dir: bool,
    },
    Moved {
        task: TaskId,
        from: PathBuf,
        to: PathBuf,
        is_dir: bool,
    },
    Failed {
        task: TaskId,
        op: FsOp,
        from: PathBuf,
        to: PathBuf,
        error: ActionError,
    },
}

impl FsMessage {
    pub fn task(&self) -> TaskId {
        match self {
            FsMessage::Duplicated { task, .. }
            | FsMessage::Moved { task, .. }
            | FsMessage::Failed { task, .. } => *task,
        }
    }
}
