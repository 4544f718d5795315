//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, Route};

/// 根据当前页面和按键获取对应的 Action
pub fn get_action(route: Route, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match route {
        Route::Trainer => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('n') | KeyCode::Char('g') => Some(Action::Regenerate),
            KeyCode::Char('s') | KeyCode::Char(' ') => Some(Action::StartTimer),
            KeyCode::Char('?') | KeyCode::Char('h') => Some(Action::OpenRules),
            _ => None,
        },
        Route::Rules => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
                Some(Action::Back)
            }
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(app.route(), key) {
        Some(action) => app.dispatch(action, Instant::now()),
        None => false,
    }
}
