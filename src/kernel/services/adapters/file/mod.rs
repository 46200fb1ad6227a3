//! 文件服务模块
//!
//! 本地文件系统实现；其他后端可以实现同一个 FileProvider

pub mod local;

pub use local::LocalFileProvider;
