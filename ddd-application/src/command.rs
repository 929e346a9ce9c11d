/// 写侧命令
///
/// 一个命令描述调用方希望发生的一次状态变更，且只交给一个处理器执行。
/// 处理结果只有成功或失败，不携带业务数据。
///
/// `NAME` 是跨重构保持不变的路由与日志标识，不要用 `type_name::<T>()` 代替。
pub trait Command: Send + Sync + 'static {
    const NAME: &'static str;
}
