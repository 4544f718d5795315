//! Action 枚举定义 (Intent)
//!
//! 用户交互与计时器回调都转化为明确的语义化 Action

use crate::countdown::CountdownId;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 训练页
    Regenerate,
    StartTimer,

    // 路由
    OpenRules,
    Back,

    // 计时器回调，携带所属倒计时的标识
    Tick(CountdownId),
}
