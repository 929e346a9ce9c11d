//! 客户实体
//!
use crate::domain::address::Address;
use ddd_domain::entity::Entity;
use ddd_domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 客户标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl FromStr for CustomerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidAggregateId(
                "customer id must not be blank".into(),
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 客户聚合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    version: usize,
    name: String,
    address: Option<Address>,
}

impl Customer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.version += 1;
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// 迁往新地址；地址未变化时不产生新版本
    pub fn relocate(&mut self, address: Address) {
        if self.address.as_ref() == Some(&address) {
            return;
        }
        self.address = Some(address);
        self.version += 1;
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn new(id: Self::Id) -> Self {
        Self {
            id,
            version: 0,
            name: String::new(),
            address: None,
        }
    }

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> usize {
        self.version
    }
}
