//! 客户限界上下文（customer）
//!
//! - `domain`：地址值对象、客户实体与仓储能力
//! - `application`：变更客户地址命令及其处理器
//! - `infrastructure`：基于内存的仓储实现
//! - `config` / `telemetry`：配置加载与日志初始化
//! - `app`：进程装配与示例命令分发
//!
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
