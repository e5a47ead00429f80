//! Interactive dashboard: status tiles, the topics table and the activity
//! feed side by side.
//!
//! The draw loop owns all state. Reloads run on a worker thread and report
//! back over a channel; the shared `SubmitGuard` keeps a second reload from
//! starting while one is in flight.

mod app;
mod event;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self as term_event, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hypodesk_runtime::{DashboardOps, SubmitGuard};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::{Duration, Instant};

use app::{Action, App};
use event::AppEvent;

fn spawn_reload(
    ops: &DashboardOps,
    guard: &SubmitGuard,
    tx: &Sender<AppEvent>,
) -> Result<(), String> {
    let in_flight = guard.try_begin("Reloading topics").map_err(|e| e.user_message())?;
    let ops = ops.clone();
    let tx = tx.clone();

    thread::spawn(move || {
        let _in_flight = in_flight;
        let result = ops.load_topics().map_err(|e| e.user_message());
        if let Err(e) = &result {
            tracing::warn!(error = %e, "topic reload failed");
        }
        let _ = tx.send(AppEvent::Reloaded(result));
    });
    Ok(())
}

pub fn run(ops: DashboardOps, user_name: String) -> Result<()> {
    let table = ops.table()?;
    let feed = ops.feed()?;
    let mut app = App::new(table, feed, user_name);

    let guard = SubmitGuard::new();
    let (tx, rx) = mpsc::channel();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    tracing::info!("dashboard started");

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();
    let mut should_quit = false;

    while !should_quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if term_event::poll(timeout)?
            && let Event::Key(key) = term_event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.handle_key(key.code) {
                Action::Quit => should_quit = true,
                Action::Reload => match spawn_reload(&ops, &guard, &tx) {
                    Ok(()) => app.begin_reload(),
                    Err(message) => app.status_line = Some(message),
                },
                Action::None => {}
            }
        }

        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::Reloaded(result) => app.apply_reload(result),
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("dashboard closed");
    Ok(())
}
