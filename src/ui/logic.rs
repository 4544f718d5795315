//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑：表格生成、倒计时、页面切换

use std::time::Instant;

use super::actions::Action;
use super::state::{App, Route, Screen, TrainerView};
use crate::countdown::{CountdownId, IntervalTask, TICK_PERIOD, TimerPhase, TimerState};
use crate::models;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return true,
            Action::Regenerate => self.regenerate(),
            Action::StartTimer => self.start_timer(now),
            Action::OpenRules => self.navigate(Route::Rules),
            Action::Back => self.navigate(Route::Trainer),
            Action::Tick(id) => self.tick(id),
        }
        false
    }

    /// 派发所有已到期的 tick
    pub fn pump_timers(&mut self, now: Instant) {
        loop {
            let due = match &mut self.screen {
                Screen::Trainer(view) => view.countdown.as_mut().and_then(|task| task.poll(now)),
                Screen::Rules => None,
            };
            match due {
                Some(id) => {
                    self.dispatch(Action::Tick(id), now);
                }
                None => break,
            }
        }
    }

    // ============ 训练页 ============

    /// 重新生成表格，不影响倒计时
    pub fn regenerate(&mut self) {
        let Screen::Trainer(view) = &mut self.screen else {
            return;
        };
        view.grid = models::generate(&mut self.rng);
        view.generation += 1;
        tracing::debug!(generation = view.generation, "grid regenerated");
        self.message = Some(view.status());
    }

    /// 启动倒计时；已在运行时从 30 秒重新开始
    pub fn start_timer(&mut self, now: Instant) {
        let Screen::Trainer(view) = &mut self.screen else {
            return;
        };
        if let Some(previous) = view.cancel_countdown() {
            tracing::info!(countdown = %previous, "countdown restarted");
        }
        let task = IntervalTask::arm(TICK_PERIOD, now);
        tracing::info!(countdown = %task.id(), "countdown started");
        view.countdown = Some(task);
        view.timer = TimerState::started();
    }

    fn tick(&mut self, id: CountdownId) {
        let Screen::Trainer(view) = &mut self.screen else {
            tracing::debug!(countdown = %id, "tick discarded: trainer not shown");
            return;
        };
        if view.countdown_id() != Some(id) {
            tracing::debug!(countdown = %id, "stale tick discarded");
            return;
        }
        view.timer = view.timer.tick();
        tracing::debug!(remaining = view.timer.remaining_seconds(), "tick");
        if view.timer.phase() == TimerPhase::Expired {
            view.cancel_countdown();
            tracing::info!(countdown = %id, "countdown expired");
        }
    }

    // ============ 路由 ============

    /// 切换页面；离开训练页会销毁其状态并取消倒计时
    pub fn navigate(&mut self, route: Route) {
        if self.route() == route {
            return;
        }
        self.screen = match route {
            Route::Trainer => Screen::Trainer(TrainerView::new(&mut self.rng)),
            Route::Rules => Screen::Rules,
        };
        self.message = self.trainer().map(TrainerView::status);
        tracing::info!(path = route.path(), "navigated");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::countdown::COUNTDOWN_SECONDS;

    fn app() -> App {
        App::with_rng(Route::Trainer, StdRng::seed_from_u64(11))
    }

    fn view(app: &App) -> &TrainerView {
        app.trainer().expect("trainer is shown")
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn first_display_has_grid_and_idle_timer() {
        let app = app();
        let view = view(&app);
        assert_eq!(view.grid.cells().len(), 25);
        assert_eq!(view.timer.phase(), TimerPhase::Idle);
        assert_eq!(app.next_deadline(), None);
        assert_eq!(app.message, Some(view.status()));
        assert!(view.status().starts_with("Генерация №1 создана в "));
    }

    #[test]
    fn start_sets_thirty_and_active() {
        let mut app = app();
        let t0 = Instant::now();
        app.dispatch(Action::StartTimer, t0);
        let view = view(&app);
        assert_eq!(view.timer.remaining_seconds(), COUNTDOWN_SECONDS);
        assert!(view.timer.is_active());
        assert_eq!(app.next_deadline(), Some(t0 + secs(1)));
    }

    #[test]
    fn pump_decrements_once_per_second() {
        let mut app = app();
        let t0 = Instant::now();
        app.dispatch(Action::StartTimer, t0);
        app.pump_timers(t0 + Duration::from_millis(500));
        assert_eq!(view(&app).timer.remaining_seconds(), 30);
        app.pump_timers(t0 + secs(1));
        assert_eq!(view(&app).timer.remaining_seconds(), 29);
        app.pump_timers(t0 + secs(4));
        assert_eq!(view(&app).timer.remaining_seconds(), 26);
        assert!(view(&app).timer.is_active());
    }

    #[test]
    fn countdown_expires_and_stops_scheduling() {
        let mut app = app();
        let t0 = Instant::now();
        app.dispatch(Action::StartTimer, t0);
        app.pump_timers(t0 + secs(30));

        let view = view(&app);
        assert_eq!(view.timer.remaining_seconds(), 0);
        assert_eq!(view.timer.phase(), TimerPhase::Expired);
        assert_eq!(view.countdown_id(), None);
        assert_eq!(app.next_deadline(), None);

        app.pump_timers(t0 + secs(90));
        assert_eq!(self::view(&app).timer.remaining_seconds(), 0);
    }

    #[test]
    fn start_after_expiry_restarts() {
        let mut app = app();
        let t0 = Instant::now();
        app.dispatch(Action::StartTimer, t0);
        app.pump_timers(t0 + secs(30));
        app.dispatch(Action::StartTimer, t0 + secs(31));
        assert_eq!(view(&app).timer, TimerState::started());
    }

    #[test]
    fn expiry_then_restart_keeps_generation_status() {
        let mut app = app();
        let t0 = Instant::now();
        let status = view(&app).status();
        app.dispatch(Action::StartTimer, t0);
        app.pump_timers(t0 + secs(30));
        assert_eq!(app.message, Some(status.clone()));

        app.dispatch(Action::StartTimer, t0 + secs(31));
        assert!(view(&app).timer.is_active());
        assert_eq!(app.message, Some(status));
    }

    #[test]
    fn rules_page_has_no_status() {
        let mut app = app();
        app.dispatch(Action::OpenRules, Instant::now());
        assert_eq!(app.message, None);
        assert_eq!(App::with_rng(Route::Rules, StdRng::seed_from_u64(2)).message, None);
    }

    #[test]
    fn regenerate_leaves_timer_alone() {
        let mut app = app();
        let t0 = Instant::now();
        app.dispatch(Action::StartTimer, t0);
        app.pump_timers(t0 + secs(5));
        let before_grid = view(&app).grid.clone();
        let before_timer = view(&app).timer;
        let before_id = view(&app).countdown_id();

        app.dispatch(Action::Regenerate, t0 + secs(5));

        let view = view(&app);
        assert_ne!(view.grid.cells(), before_grid.cells());
        assert_eq!(view.generation, 2);
        assert_eq!(app.message, Some(view.status()));
        assert!(view.status().starts_with("Генерация №2 создана в "));
        assert_eq!(view.timer, before_timer);
        assert_eq!(view.countdown_id(), before_id);
    }

    #[test]
    fn start_leaves_grid_alone() {
        let mut app = app();
        let before = view(&app).grid.clone();
        app.dispatch(Action::StartTimer, Instant::now());
        assert_eq!(view(&app).grid, before);
    }

    #[test]
    fn double_start_keeps_one_countdown() {
        let mut app = app();
        let t0 = Instant::now();
        app.dispatch(Action::StartTimer, t0);
        let first = view(&app).countdown_id().unwrap();
        app.pump_timers(t0 + secs(3));

        app.dispatch(Action::StartTimer, t0 + Duration::from_millis(3200));
        let second = view(&app).countdown_id().unwrap();
        assert_ne!(first, second);
        assert_eq!(view(&app).timer.remaining_seconds(), 30);

        // 旧倒计时的 tick 被丢弃
        app.dispatch(Action::Tick(first), t0 + secs(4));
        assert_eq!(view(&app).timer.remaining_seconds(), 30);

        // 新倒计时每秒只减一次
        app.pump_timers(t0 + Duration::from_millis(4200));
        assert_eq!(view(&app).timer.remaining_seconds(), 29);
        app.pump_timers(t0 + Duration::from_millis(5200));
        assert_eq!(view(&app).timer.remaining_seconds(), 28);
    }

    #[test]
    fn leaving_trainer_cancels_countdown_and_discards_state() {
        let mut app = app();
        let t0 = Instant::now();
        app.dispatch(Action::StartTimer, t0);
        let old = view(&app).countdown_id().unwrap();

        app.dispatch(Action::OpenRules, t0 + secs(2));
        assert_eq!(app.route(), Route::Rules);
        assert_eq!(app.next_deadline(), None);
        app.pump_timers(t0 + secs(10));

        app.dispatch(Action::Back, t0 + secs(10));
        assert_eq!(app.route(), Route::Trainer);
        let view = view(&app);
        assert_eq!(view.timer.phase(), TimerPhase::Idle);
        assert_eq!(view.generation, 1);
        assert_eq!(app.message, Some(view.status()));

        app.dispatch(Action::Tick(old), t0 + secs(11));
        assert_eq!(self::view(&app).timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn trainer_actions_are_ignored_on_rules_page() {
        let mut app = App::with_rng(Route::Rules, StdRng::seed_from_u64(1));
        assert!(!app.dispatch(Action::StartTimer, Instant::now()));
        assert!(!app.dispatch(Action::Regenerate, Instant::now()));
        assert_eq!(app.route(), Route::Rules);
        assert!(app.trainer().is_none());
    }

    #[test]
    fn quit_returns_true() {
        let mut app = app();
        assert!(app.dispatch(Action::Quit, Instant::now()));
    }
}
