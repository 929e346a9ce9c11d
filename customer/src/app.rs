//! 进程装配：仓储、处理器与命令总线
//!
use crate::application::{ChangeCustomerAddressCommand, ChangeCustomerAddressCommandHandler};
use crate::config::CustomerConfig;
use crate::domain::Address;
use crate::infrastructure::InMemoryCustomerRepository;
use anyhow::Context;
use ddd_application::InMemoryCommandBus;
use ddd_application::command_bus::CommandBus;
use ddd_application::context::AppContext;
use ddd_domain::business_context::BusinessContext;
use std::sync::Arc;

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 是否分发了 `[sample]` 配置中的命令
    pub dispatched: bool,
    /// 运行期间仓储被调用的次数
    pub repository_operations: usize,
}

/// 装配依赖并在配置了 `[sample]` 时分发一条变更地址命令
pub async fn run(config: &CustomerConfig) -> anyhow::Result<RunSummary> {
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let handler = ChangeCustomerAddressCommandHandler::new(repository.clone());

    let bus = InMemoryCommandBus::new();
    bus.register::<ChangeCustomerAddressCommand, _>(Arc::new(handler))?;

    let Some(sample) = config.sample.clone() else {
        tracing::info!("no sample command configured, nothing to dispatch");
        return Ok(RunSummary {
            dispatched: false,
            repository_operations: repository.operations(),
        });
    };

    let address = Address::new(
        sample.street,
        sample.city,
        sample.postal_code,
        sample.country,
    )
    .context("invalid sample address")?;

    let ctx = AppContext::new(
        BusinessContext::builder()
            .correlation_id(format!("{}-startup", config.app_name))
            .actor_type("system")
            .actor_id(config.app_name.clone())
            .build(),
    );

    bus.dispatch(
        &ctx,
        ChangeCustomerAddressCommand::new(sample.customer_id, address),
    )
    .await?;

    let summary = RunSummary {
        dispatched: true,
        repository_operations: repository.operations(),
    };
    tracing::info!(
        repository_operations = summary.repository_operations,
        "sample command dispatched"
    );
    Ok(summary)
}
