use chrono::{DateTime, Local};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use ratatui::style::Color;

/// 表格边长 (5×5)
pub const GRID_SIDE: usize = 5;

/// 单元格数量
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// 数字颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Blue,
    Red,
    Green,
    Orange,
    Purple,
}

/// 可用的调色板，每个单元格从中独立均匀抽取
pub const PALETTE: [ColorToken; 5] = [
    ColorToken::Blue,
    ColorToken::Red,
    ColorToken::Green,
    ColorToken::Orange,
    ColorToken::Purple,
];

impl ColorToken {
    pub fn color(self) -> Color {
        match self {
            ColorToken::Blue => Color::Rgb(0x1f, 0x77, 0xb4),
            ColorToken::Red => Color::Rgb(0xd6, 0x27, 0x28),
            ColorToken::Green => Color::Rgb(0x2c, 0xa0, 0x2c),
            ColorToken::Orange => Color::Rgb(0xff, 0x7f, 0x0e),
            ColorToken::Purple => Color::Rgb(0x94, 0x67, 0xbd),
        }
    }
}

/// 表格中的一个格子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: u8,
    pub color: ColorToken,
}

/// 一次生成的完整表格
///
/// 每次生成整体替换，不做局部修改
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    cells: Vec<Cell>,
    pub generated_at: DateTime<Local>,
}

impl GridState {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// 按行切分，供渲染使用
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells().chunks(GRID_SIDE)
    }
}

/// 生成新的舒尔特表
///
/// 数字 1..=25 做均匀洗牌 (Fisher–Yates)，颜色逐格独立抽取，允许重复
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> GridState {
    let mut values: Vec<u8> = (1..=GRID_CELLS as u8).collect();
    values.shuffle(rng);

    let cells = values
        .into_iter()
        .map(|value| Cell {
            value,
            // 调色板非空，choose 不会返回 None
            color: *PALETTE.choose(rng).unwrap_or(&ColorToken::Blue),
        })
        .collect();

    GridState {
        cells,
        generated_at: Local::now(),
    }
}
