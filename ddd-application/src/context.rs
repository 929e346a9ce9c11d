use ddd_domain::business_context::BusinessContext;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用所需的横切信息，例如：
/// - 业务语境（`BusinessContext`）：关联追踪 `correlation_id`、因果链 `causation_id`、
///   执行者类型/ID 等；
/// - 幂等键（`idempotency_key`）：用于在基础设施层实现请求幂等（如 API 层重复提交保护）。
///
/// 典型用法：
/// ```rust
/// use ddd_application::context::AppContext;
/// use ddd_domain::business_context::BusinessContext;
///
/// let ctx = AppContext::new(
///     BusinessContext::builder()
///         .correlation_id("cor-123")
///         .actor_type("user")
///         .actor_id("u-1")
///         .build(),
/// )
/// .with_idempotency_key("idem-xyz");
///
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// assert_eq!(ctx.idempotency_key.as_deref(), Some("idem-xyz"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    /// 业务语境（链路追踪、审计主体、操作因果）
    pub biz: BusinessContext,
    /// 幂等键（可选）：为空则由上层或基础设施决定是否参与幂等
    pub idempotency_key: Option<String>,
}

impl AppContext {
    pub fn new(biz: BusinessContext) -> Self {
        Self {
            biz,
            idempotency_key: None,
        }
    }

    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// 日志字段用的关联ID
    pub fn correlation_id(&self) -> Option<&str> {
        self.biz.correlation_id()
    }
}
