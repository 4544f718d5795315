//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体、路由与训练页状态
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs): 用户交互与计时器回调转化为明确的语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::{App, Route};
pub use view::render;
