use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// 在 `r` 中居中放置固定大小的区域，空间不足时收缩
pub fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

/// 将区域等分为 `n` 个固定大小的格子
pub fn fixed_cells(r: Rect, n: usize, size: u16, horizontal: bool) -> Vec<Rect> {
    let constraints = vec![Constraint::Length(size); n];
    let layout = if horizontal {
        Layout::horizontal(constraints)
    } else {
        Layout::vertical(constraints)
    };
    layout.split(r).to_vec()
}
