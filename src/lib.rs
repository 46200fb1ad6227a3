//! zside - 编辑器侧边栏文件动作库
//!
//! 模块结构：
//! - kernel: 无界面核心（路径解析、打开文档重定向、命令与处理器）
//! - kernel::services: 服务层（ports：trait 与数据契约；adapters：本地实现）

pub mod kernel;
