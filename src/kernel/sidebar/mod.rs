//! 侧边栏文件动作
//!
//! 每个动作：解析目标路径 → 询问用户 → 执行文件系统操作 → 重定向已打开文档 → 状态栏提示。
//! 错误在动作边界上转为状态栏消息，同时以 `ActionResult` 返回给调用方。

mod copy;
mod create;
mod delete;
mod rename;
mod transfer;

use crate::kernel::command::SidebarCommand;
use crate::kernel::error::ActionError;
use crate::kernel::paths;
use crate::kernel::services::adapters::{
    ClipboardService, FsMessage, FsRuntime, LocalFileProvider, TaskId, TrashService,
};
use crate::kernel::services::ports::{
    ClipboardPort, DocumentRegistry, FileProvider, Settings, SidebarHost, TrashPort,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub type ActionResult = Result<Outcome, ActionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No selection and no active document.
    NoTarget,
    /// Prompt cancelled, empty answer or confirmation declined.
    Cancelled,
    /// The answer pointed back at the source.
    Unchanged,
    Created(PathBuf),
    Relocated { to: PathBuf, retargeted: usize },
    Duplicated(PathBuf),
    /// Background task accepted; its result arrives as an [`FsMessage`].
    Submitted(TaskId),
    Trashed(usize),
    Copied(String),
}

/// The window an action runs against: its UI primitives and its open documents.
pub struct ActionContext<'a> {
    pub host: &'a mut dyn SidebarHost,
    pub documents: &'a mut dyn DocumentRegistry,
}

impl<'a> ActionContext<'a> {
    pub fn new(host: &'a mut dyn SidebarHost, documents: &'a mut dyn DocumentRegistry) -> Self {
        Self { host, documents }
    }
}

pub struct SidebarServices {
    pub fs: Arc<dyn FileProvider>,
    pub clipboard: Box<dyn ClipboardPort>,
    pub trash: Box<dyn TrashPort>,
}

impl SidebarServices {
    /// Local filesystem, system clipboard and platform trash.
    pub fn local() -> Self {
        Self {
            fs: Arc::new(LocalFileProvider::new()),
            clipboard: Box::new(ClipboardService::new()),
            trash: Box::new(TrashService::new()),
        }
    }
}

pub struct Sidebar {
    fs: Arc<dyn FileProvider>,
    clipboard: Box<dyn ClipboardPort>,
    trash: Box<dyn TrashPort>,
    runtime: FsRuntime,
    settings: Settings,
}

impl Sidebar {
    /// Completion messages of duplicate/move are sent to `tx`; feed them
    /// back through [`Sidebar::handle_message`].
    pub fn new(settings: Settings, tx: Sender<FsMessage>) -> io::Result<Self> {
        Self::with_services(SidebarServices::local(), settings, tx)
    }

    pub fn with_services(
        services: SidebarServices,
        settings: Settings,
        tx: Sender<FsMessage>,
    ) -> io::Result<Self> {
        let runtime = FsRuntime::new(Arc::clone(&services.fs), tx)?;
        Ok(Self {
            fs: services.fs,
            clipboard: services.clipboard,
            trash: services.trash,
            runtime,
            settings,
        })
    }

    pub fn run(
        &mut self,
        cx: &mut ActionContext<'_>,
        command: SidebarCommand,
        paths: &[PathBuf],
    ) -> ActionResult {
        tracing::debug!(command = command.name(), paths = paths.len(), "run sidebar command");
        match command {
            SidebarCommand::NewFile => self.new_file(cx, paths),
            SidebarCommand::NewFolder => self.new_folder(cx, paths),
            SidebarCommand::Rename => self.rename(cx, paths),
            SidebarCommand::Duplicate => self.duplicate(cx, paths),
            SidebarCommand::Move => self.move_path(cx, paths),
            SidebarCommand::Delete => self.delete(cx, paths),
            SidebarCommand::CopyName => self.copy_name(cx, paths),
            SidebarCommand::CopyRelativePath => self.copy_relative_path(cx, paths),
            SidebarCommand::CopyAbsolutePath => self.copy_absolute_path(cx, paths),
        }
    }

    fn target(cx: &ActionContext<'_>, paths: &[PathBuf]) -> Option<PathBuf> {
        paths::resolve_path(paths, || cx.host.active_file())
    }

    fn targets(cx: &ActionContext<'_>, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths::resolve_paths(paths, || cx.host.active_file())
    }

    /// Directory new entries go into: the target itself, or its parent when
    /// the target is a file.
    fn base_dir(&self, target: &Path) -> PathBuf {
        if self.fs.is_file(target) {
            target
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| target.to_path_buf())
        } else {
            target.to_path_buf()
        }
    }
}

/// Sends a failure to the status bar and the log, passes the result through.
fn report(
    cx: &mut ActionContext<'_>,
    result: ActionResult,
    describe: impl FnOnce(&ActionError) -> String,
) -> ActionResult {
    if let Err(error) = &result {
        let message = describe(error);
        tracing::warn!(kind = ?error.kind(), error = %error, "{}", message);
        cx.host.status_message(&message);
    }
    result
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/sidebar/support.rs"]
mod test_support;
