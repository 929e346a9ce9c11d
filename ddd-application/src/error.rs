use ddd_domain::error::DomainError;

/// 应用层错误：领域错误经 `From` 自动提升，其余为调度与输入问题
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    /// 命令内容不被处理器接受
    #[error("validation: {0}")]
    Validation(String),

    /// 总线上没有该命令的处理器
    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    /// 同一命令只允许一个处理器
    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },

    /// 类型擦除后的命令无法还原
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_converts_with_question_mark() {
        fn load() -> Result<(), AppError> {
            let parsed: Result<(), DomainError> =
                Err(DomainError::InvalidAggregateId("bad id".into()));
            parsed?;
            Ok(())
        }

        let err = load().unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::InvalidAggregateId(_))));
        assert_eq!(err.to_string(), "domain: invalid aggregate id: bad id");
    }
}
