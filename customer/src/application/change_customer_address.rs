//! 变更客户地址
//!
use crate::domain::{Address, CustomerRepository};
use async_trait::async_trait;
use ddd_application::command::Command;
use ddd_application::command_handler::CommandHandler;
use ddd_application::context::AppContext;
use ddd_application::error::AppError;
use serde::{Deserialize, Serialize};

/// 变更客户地址命令的只读视图
pub trait ChangeCustomerAddress {
    fn customer_id(&self) -> &str;

    fn new_address(&self) -> &Address;
}

/// 变更客户地址命令
///
/// 纯数据载体：字段由调用方在分发前设置，命令本身不做校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCustomerAddressCommand {
    pub customer_id: String,
    pub new_address: Address,
}

impl ChangeCustomerAddressCommand {
    pub fn new(customer_id: impl Into<String>, new_address: Address) -> Self {
        Self {
            customer_id: customer_id.into(),
            new_address,
        }
    }
}

impl ChangeCustomerAddress for ChangeCustomerAddressCommand {
    fn customer_id(&self) -> &str {
        &self.customer_id
    }

    fn new_address(&self) -> &Address {
        &self.new_address
    }
}

impl Command for ChangeCustomerAddressCommand {
    const NAME: &'static str = "customer.change_address";
}

/// 变更客户地址命令处理器
///
/// 持有注入的客户仓储，但目前不执行任何领域逻辑：
/// `handle` 总是成功返回，既不读取也不写入仓储。
pub struct ChangeCustomerAddressCommandHandler<R>
where
    R: CustomerRepository,
{
    repository: R,
}

impl<R> ChangeCustomerAddressCommandHandler<R>
where
    R: CustomerRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R> CommandHandler<ChangeCustomerAddressCommand> for ChangeCustomerAddressCommandHandler<R>
where
    R: CustomerRepository,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        cmd: ChangeCustomerAddressCommand,
    ) -> Result<(), AppError> {
        // TODO: 地址变更规则确定后，按 id 加载客户、`relocate` 到新地址并经 `self.repository` 保存
        tracing::warn!(
            command = ChangeCustomerAddressCommand::NAME,
            customer_id = cmd.customer_id(),
            new_address = %cmd.new_address(),
            correlation_id = ctx.correlation_id().unwrap_or("-"),
            "address change is not implemented; command acknowledged without effect"
        );
        Ok(())
    }
}
