//! DDD 领域层基础库（ddd-domain）
//!
//! 提供以 DDD 为中心的通用抽象，供各限界上下文复用：
//! - 实体（`entity`）：统一的标识与版本
//! - 值对象（`value_object`）：无标识、以值相等为准的对象及其校验
//! - 业务语境（`business_context::BusinessContext`）：链路追踪与审计主体
//! - 统一错误（`error`）
//!
//! 本 crate 不依赖任何存储或运行时实现，仅定义领域层接口与最小必要的错误类型。
//!
pub mod business_context;
pub mod entity;
pub mod error;
pub mod value_object;
