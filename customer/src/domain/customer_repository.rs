//! 客户仓储能力
//!
use crate::domain::customer::{Customer, CustomerId};
use async_trait::async_trait;
use ddd_domain::error::DomainResult;
use std::sync::Arc;

/// 客户聚合的查找与保存
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>>;

    /// 保存客户；实现方需以 `version` 做乐观并发校验
    async fn save(&self, customer: &Customer) -> DomainResult<()>;
}

#[async_trait]
impl<T> CustomerRepository for Arc<T>
where
    T: CustomerRepository + ?Sized,
{
    async fn find_by_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, customer: &Customer) -> DomainResult<()> {
        (**self).save(customer).await
    }
}
