//! 侧边栏命令：语义命令定义与菜单文字

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarCommand {
    NewFile,
    NewFolder,
    Rename,
    Duplicate,
    Move,
    Delete,
    CopyName,
    CopyRelativePath,
    CopyAbsolutePath,
}

impl SidebarCommand {
    /// Menu order.
    pub const ALL: [SidebarCommand; 9] = [
        SidebarCommand::NewFile,
        SidebarCommand::NewFolder,
        SidebarCommand::Rename,
        SidebarCommand::Duplicate,
        SidebarCommand::Move,
        SidebarCommand::Delete,
        SidebarCommand::CopyName,
        SidebarCommand::CopyRelativePath,
        SidebarCommand::CopyAbsolutePath,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SidebarCommand::NewFile => "new_file",
            SidebarCommand::NewFolder => "new_folder",
            SidebarCommand::Rename => "rename",
            SidebarCommand::Duplicate => "duplicate",
            SidebarCommand::Move => "move",
            SidebarCommand::Delete => "delete",
            SidebarCommand::CopyName => "copy_name",
            SidebarCommand::CopyRelativePath => "copy_relative_path",
            SidebarCommand::CopyAbsolutePath => "copy_absolute_path",
        }
    }

    /// Accepts the snake_case name, with `-` allowed in place of `_`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().replace('-', "_");
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// Context-menu caption.
    pub fn caption(&self) -> &'static str {
        match self {
            SidebarCommand::NewFile => "New File",
            SidebarCommand::NewFolder => "New Folder",
            SidebarCommand::Rename => "Rename...",
            SidebarCommand::Duplicate => "Duplicate…",
            SidebarCommand::Move => "Move…",
            SidebarCommand::Delete => "Delete",
            SidebarCommand::CopyName => "Copy Filename",
            SidebarCommand::CopyRelativePath => "Copy Relative Path",
            SidebarCommand::CopyAbsolutePath => "Copy Absolute Path",
        }
    }

    /// Whether the command changes the filesystem.
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            SidebarCommand::CopyName
                | SidebarCommand::CopyRelativePath
                | SidebarCommand::CopyAbsolutePath
        )
    }

    /// Whether every selected path is used, not just the first one.
    pub fn accepts_multiple(&self) -> bool {
        matches!(
            self,
            SidebarCommand::Delete
                | SidebarCommand::CopyName
                | SidebarCommand::CopyRelativePath
                | SidebarCommand::CopyAbsolutePath
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/command.rs"]
mod tests;
