mod config;
mod countdown;
mod error;
mod logging;
mod models;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{default_config_path, load_config};
use crate::ui::{App, render};

fn main() -> error::Result<()> {
    // 配置文件在进入 raw mode 之前读取，出错时可以直接打印
    let config = load_config(&default_config_path()?)?;
    logging::init_tracing(&config.log_filter);

    let mut app = App::new(config.start_route);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, config.input_poll());

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }

    // 恢复终端，每一步都要执行，不因前一步失败而中断
    let restored = restore_terminal(&mut terminal);
    if let Err(e) = &restored {
        tracing::error!(error = %e, "failed to restore terminal");
    }
    tracing::info!("exiting");

    result.and(restored).map_err(error::AppError::from)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

/// 单线程事件循环：等待按键，最多等到下一个 tick 到期
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    input_poll: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let timeout = app
            .next_deadline()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .map_or(input_poll, |wait| wait.min(input_poll));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && ui::handle_key_event(app, key)
        {
            break;
        }

        app.pump_timers(Instant::now());
    }
    Ok(())
}
