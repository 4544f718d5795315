//! 视图层模块
//!
//! 包含主渲染入口：训练页与规则页

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, Route, Screen, TrainerView};
use crate::countdown::TimerPhase;
use crate::models::GRID_SIDE;
use components::{render_button, render_cell};
use layouts::{centered_box, fixed_cells};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 38;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 页面内容
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app.route(), chunks[0]);
    match &app.screen {
        Screen::Trainer(view) => render_trainer(frame, view, chunks[1]),
        Screen::Rules => render_rules(frame, chunks[1]),
    }
    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, route: Route, area: Rect) {
    let (title, link) = match route {
        Route::Trainer => ("Таблица Шульте", "[?] Правила"),
        Route::Rules => ("Правила игры", "[Esc] ← Назад"),
    };

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).areas(inner);

    let heading = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(heading, left);

    let nav = Paragraph::new(link)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(nav, right);
}

fn render_trainer(frame: &mut Frame, view: &TrainerView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(CELL_HEIGHT * GRID_SIDE as u16), // 表格
            Constraint::Length(3),                           // 按钮
            Constraint::Length(1),                           // 倒计时
        ])
        .split(area);

    render_grid(frame, view, chunks[0]);
    render_buttons(frame, chunks[1]);
    render_countdown(frame, view, chunks[2]);
}

fn render_grid(frame: &mut Frame, view: &TrainerView, area: Rect) {
    let side = GRID_SIDE as u16;
    let grid_area = centered_box(CELL_WIDTH * side, CELL_HEIGHT * side, area);
    let rows = fixed_cells(grid_area, GRID_SIDE, CELL_HEIGHT, false);

    for (row_area, cells) in rows.iter().zip(view.grid.rows()) {
        let columns = fixed_cells(*row_area, GRID_SIDE, CELL_WIDTH, true);
        for (cell_area, cell) in columns.iter().zip(cells) {
            render_cell(frame, *cell_area, cell);
        }
    }
}

fn render_buttons(frame: &mut Frame, area: Rect) {
    let row = centered_box(BUTTON_WIDTH * 2, area.height, area);
    let buttons = fixed_cells(row, 2, BUTTON_WIDTH, true);
    render_button(frame, buttons[0], "n", "Создать новую генерацию");
    render_button(frame, buttons[1], "s", "Запустить таймер (30 сек)");
}

/// 只在倒计时运行时显示剩余时间
fn render_countdown(frame: &mut Frame, view: &TrainerView, area: Rect) {
    let text = match view.timer.phase() {
        TimerPhase::Running => format!("⏱ Осталось: {} сек", view.timer.remaining_seconds()),
        TimerPhase::Idle | TimerPhase::Expired => String::new(),
    };
    let countdown = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(countdown, area);
}

fn render_rules(frame: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Цель — как можно быстрее найти все числа от "),
            Span::styled("1 до 25", bold),
            Span::raw(" по порядку."),
        ]),
        Line::default(),
    ];
    let rules = [
        "Смотри в центр таблицы, не перемещая взгляд.",
        "Находи числа последовательно (1, 2, 3 … 25).",
        "Отмечай каждое найденное число мысленно или пальцем.",
        "Работай на время — стандартно 30 секунд.",
    ];
    lines.extend(
        rules
            .iter()
            .enumerate()
            .map(|(i, rule)| Line::from(format!("{}. {}", i + 1, rule))),
    );

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, centered_box(64, 10, area));
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.route() {
        Route::Trainer => "[n] новая таблица  [s] таймер  [?] правила  [q] выход",
        Route::Rules => "[Esc/b] назад  [q] выход",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
