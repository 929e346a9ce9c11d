use crate::{command::Command, context::AppContext, error::AppError};
use async_trait::async_trait;
use std::sync::Arc;

/// 命令处理器：接收命令并负责执行其效果
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>;
}

#[async_trait]
impl<C, T> CommandHandler<C> for Arc<T>
where
    C: Command,
    T: CommandHandler<C> + ?Sized,
{
    async fn handle(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError> {
        (**self).handle(ctx, cmd).await
    }
}
