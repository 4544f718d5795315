//! App 状态定义 (Model)
//!
//! 包含应用状态结构体、路由及训练页状态

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use crate::countdown::{CountdownId, IntervalTask, TimerState};
use crate::models::{self, GridState};

/// 路由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Trainer, // "/"
    Rules,   // "/rules"
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Trainer => "/",
            Route::Rules => "/rules",
        }
    }
}

/// 当前显示的页面
///
/// 训练页的状态只在页面存活期间存在，切走即销毁
#[derive(Debug)]
pub enum Screen {
    Trainer(TrainerView),
    Rules,
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Trainer(_) => Route::Trainer,
            Screen::Rules => Route::Rules,
        }
    }
}

/// 训练页状态
///
/// 表格和倒计时互相独立；`countdown` 是当前倒计时的取消句柄
#[derive(Debug)]
pub struct TrainerView {
    pub grid: GridState,
    pub timer: TimerState,
    pub generation: u64,
    pub(super) countdown: Option<IntervalTask>,
}

impl TrainerView {
    /// 首次显示时生成一张表
    pub fn new(rng: &mut StdRng) -> Self {
        Self {
            grid: models::generate(rng),
            timer: TimerState::default(),
            generation: 1,
            countdown: None,
        }
    }

    /// 状态栏文字：最近一次生成的序号和时间
    pub fn status(&self) -> String {
        format!(
            "Генерация №{} создана в {}",
            self.generation,
            self.grid.generated_at.format("%H:%M:%S")
        )
    }

    /// 当前倒计时的标识
    pub fn countdown_id(&self) -> Option<CountdownId> {
        self.countdown.as_ref().map(IntervalTask::id)
    }

    /// 下一次 tick 的时间
    pub fn next_due(&self) -> Option<Instant> {
        self.countdown.as_ref().map(IntervalTask::next_due)
    }

    /// 取消当前倒计时的调度
    pub fn cancel_countdown(&mut self) -> Option<CountdownId> {
        self.countdown.take().map(IntervalTask::cancel)
    }
}

impl Drop for TrainerView {
    fn drop(&mut self) {
        if let Some(id) = self.cancel_countdown() {
            tracing::debug!(countdown = %id, "trainer torn down with countdown pending");
        }
    }
}

/// 应用状态
pub struct App {
    pub screen: Screen,
    pub message: Option<String>,
    pub(super) rng: StdRng,
}

impl App {
    /// 创建新的应用实例
    pub fn new(start: Route) -> Self {
        Self::with_rng(start, StdRng::from_os_rng())
    }

    /// 使用指定的随机源（测试中使用固定种子）
    pub fn with_rng(start: Route, mut rng: StdRng) -> Self {
        let screen = match start {
            Route::Trainer => Screen::Trainer(TrainerView::new(&mut rng)),
            Route::Rules => Screen::Rules,
        };
        let message = match &screen {
            Screen::Trainer(view) => Some(view.status()),
            Screen::Rules => None,
        };
        Self {
            screen,
            message,
            rng,
        }
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn trainer(&self) -> Option<&TrainerView> {
        match &self.screen {
            Screen::Trainer(view) => Some(view),
            Screen::Rules => None,
        }
    }

    /// 事件循环下一次需要醒来的时间
    pub fn next_deadline(&self) -> Option<Instant> {
        self.trainer().and_then(TrainerView::next_due)
    }
}
