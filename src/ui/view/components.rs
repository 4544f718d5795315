//! 通用 UI 组件
//!
//! 单元格、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::models::Cell;

/// [组件] 表格中的一个数字
pub fn render_cell(frame: &mut Frame, area: Rect, cell: &Cell) {
    let number = Paragraph::new(cell.value.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(cell.color.color())
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Gray)),
        );
    frame.render_widget(number, area);
}

/// [组件] 带快捷键提示的按钮
pub fn render_button(frame: &mut Frame, area: Rect, key: &str, label: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!("[{}] ", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(label),
    ]);
    let button = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(button, area);
}
