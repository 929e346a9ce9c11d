//! 地址值对象
//!
use ddd_domain::error::{DomainError, DomainResult};
use ddd_domain::value_object::ValueObject;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 客户地址
///
/// 以值相等为准；`postal_code` 允许为空（并非所有国家/地区都有邮编）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// 去除首尾空白后校验并创建地址
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        Self {
            street: trimmed(street),
            city: trimmed(city),
            postal_code: trimmed(postal_code),
            country: trimmed(country),
        }
        .validated()
    }
}

fn trimmed(value: impl Into<String>) -> String {
    value.into().trim().to_string()
}

impl ValueObject for Address {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        for (field, value) in [
            ("street", &self.street),
            ("city", &self.city),
            ("country", &self.country),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidValue {
                    reason: format!("address {field} must not be blank"),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.postal_code.is_empty() {
            write!(f, "{}, {}, {}", self.street, self.city, self.country)
        } else {
            write!(
                f,
                "{}, {} {}, {}",
                self.street, self.postal_code, self.city, self.country
            )
        }
    }
}
