use crate::domain::{Customer, CustomerId, CustomerRepository};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use ddd_domain::entity::Entity;
use ddd_domain::error::{DomainError, DomainResult};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 基于内存的客户仓储
/// - 以 `CustomerId` 为键保存客户快照
/// - 保存时要求版本严格递增（乐观锁）
/// - 记录被调用的次数，便于验证调用方是否访问了仓储
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: DashMap<CustomerId, Customer>,
    operations: AtomicUsize,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置客户数据（不计入调用次数）
    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let repo = Self::new();
        for customer in customers {
            repo.customers.insert(customer.id().clone(), customer);
        }
        repo
    }

    /// `find_by_id` 与 `save` 的累计调用次数
    pub fn operations(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    /// 读取快照（不计入调用次数）
    pub fn snapshot(&self, id: &CustomerId) -> Option<Customer> {
        self.customers.get(id).map(|c| c.value().clone())
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot(id))
    }

    async fn save(&self, customer: &Customer) -> DomainResult<()> {
        self.operations.fetch_add(1, Ordering::SeqCst);

        match self.customers.entry(customer.id().clone()) {
            Entry::Occupied(mut slot) => {
                let stored = slot.get().version();
                if customer.version() <= stored {
                    return Err(DomainError::VersionConflict {
                        expected: stored + 1,
                        actual: customer.version(),
                    });
                }
                slot.insert(customer.clone());
            }
            Entry::Vacant(slot) => {
                slot.insert(customer.clone());
            }
        }

        tracing::trace!(customer_id = %customer.id(), version = customer.version(), "customer saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Address;

    fn customer(id: &str) -> Customer {
        Customer::new(id.parse().unwrap())
    }

    #[tokio::test]
    async fn save_then_find() {
        let repo = InMemoryCustomerRepository::new();
        let mut c = customer("C-1");
        c.rename("Ada");

        repo.save(&c).await.unwrap();
        let found = repo.find_by_id(c.id()).await.unwrap().unwrap();

        assert_eq!(found, c);
        assert_eq!(repo.operations(), 2);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = InMemoryCustomerRepository::new();
        let id: CustomerId = "C-404".parse().unwrap();
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn stale_version_is_rejected() {
        let mut c = customer("C-1");
        c.rename("Ada");
        let repo = InMemoryCustomerRepository::with_customers([c.clone()]);

        let err = repo.save(&c).await.unwrap_err();
        match err {
            DomainError::VersionConflict { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        c.relocate(Address::new("1 Main St", "Springfield", "12345", "US").unwrap());
        repo.save(&c).await.unwrap();
        assert_eq!(repo.snapshot(c.id()).unwrap().version(), 2);
    }

    #[tokio::test]
    async fn seeding_does_not_count_as_operation() {
        let repo = InMemoryCustomerRepository::with_customers([customer("C-1"), customer("C-2")]);
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.operations(), 0);
    }
}
