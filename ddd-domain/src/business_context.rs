//! 业务语境（Business Context）
//!
//! 随一次业务调用传递的横切信息：关联追踪与触发主体。
//!
use bon::Builder;
use serde::{Deserialize, Serialize};

/// 业务上下文信息
#[derive(Builder, Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessContext {
    /// 关联ID（贯穿整条调用链）
    #[builder(into)]
    correlation_id: Option<String>,
    /// 因果ID（直接触发本次调用的消息）
    #[builder(into)]
    causation_id: Option<String>,
    /// 触发主体类型（如用户、系统等）
    #[builder(into)]
    actor_type: Option<String>,
    /// 触发主体ID
    #[builder(into)]
    actor_id: Option<String>,
}

impl BusinessContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn causation_id(&self) -> Option<&str> {
        self.causation_id.as_deref()
    }

    pub fn actor_type(&self) -> Option<&str> {
        self.actor_type.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    /// 派生一个由 `causation_id` 触发的下游语境，保留关联ID与主体
    pub fn caused_by(&self, causation_id: impl Into<String>) -> Self {
        Self {
            causation_id: Some(causation_id.into()),
            ..self.clone()
        }
    }
}
