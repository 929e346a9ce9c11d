use crate::{command::Command, context::AppContext, error::AppError};
use async_trait::async_trait;

/// 按命令类型找到唯一的处理器并交给它执行
///
/// `dispatch` 是泛型方法，因此该 trait 不是对象安全的，使用方持有具体的总线类型。
#[async_trait]
pub trait CommandBus: Send + Sync {
    /// 未注册处理器时返回 [`AppError::HandlerNotFound`]
    async fn dispatch<C: Command>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>;
}
