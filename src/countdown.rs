//! 倒计时
//!
//! - `TimerState`: 纯状态机，每次转换返回新值
//! - `IntervalTask`: 可取消的 1 秒周期任务，每个倒计时拥有唯一的 `CountdownId`

use std::fmt;
use std::time::{Duration, Instant};

use uuid::Uuid;

/// 倒计时起始秒数
pub const COUNTDOWN_SECONDS: u32 = 30;

/// 倒计时周期
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// 倒计时阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Expired,
}

/// 倒计时状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    remaining_seconds: u32,
    active: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::idle()
    }
}

impl TimerState {
    /// 尚未启动
    pub fn idle() -> Self {
        Self {
            remaining_seconds: COUNTDOWN_SECONDS,
            active: false,
        }
    }

    /// 从任意状态重新开始
    pub fn started() -> Self {
        Self {
            remaining_seconds: COUNTDOWN_SECONDS,
            active: true,
        }
    }

    /// 经过一秒
    ///
    /// 只在 Running 时生效，归零即停止
    pub fn tick(self) -> Self {
        if !self.active || self.remaining_seconds == 0 {
            return self;
        }
        let remaining_seconds = self.remaining_seconds - 1;
        Self {
            remaining_seconds,
            active: remaining_seconds > 0,
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> TimerPhase {
        if self.is_active() {
            TimerPhase::Running
        } else if self.remaining_seconds == 0 {
            TimerPhase::Expired
        } else {
            TimerPhase::Idle
        }
    }
}

/// 一次倒计时的标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountdownId(Uuid);

impl CountdownId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CountdownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 可取消的周期任务
///
/// 持有者就是取消句柄：调用 `cancel` 或直接丢弃后不会再产生 tick。
#[derive(Debug)]
pub struct IntervalTask {
    id: CountdownId,
    period: Duration,
    next_due: Instant,
}

impl IntervalTask {
    /// 从 `now` 开始计时，第一次 tick 在一个周期之后
    pub fn arm(period: Duration, now: Instant) -> Self {
        Self {
            id: CountdownId::new(),
            period,
            next_due: now + period,
        }
    }

    pub fn id(&self) -> CountdownId {
        self.id
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// 到期则返回一次 tick 并推进到下一个周期
    ///
    /// 事件循环卡顿时，重复调用会逐个补发错过的 tick
    pub fn poll(&mut self, now: Instant) -> Option<CountdownId> {
        if now < self.next_due {
            return None;
        }
        self.next_due += self.period;
        Some(self.id)
    }

    pub fn cancel(self) -> CountdownId {
        tracing::debug!(countdown = %self.id, "countdown schedule cancelled");
        self.id
    }
}
