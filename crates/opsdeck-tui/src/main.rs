mod app;
mod command;
mod effects;
mod strings;
mod tabs;
mod theme;
mod ui;
mod widgets;

use std::io::{self, BufRead, Write as _};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use opsdeck_core::prefs::Prefs;

use crate::app::App;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let headless = args.iter().any(|a| a == "--headless");

    opsdeck_core::logging::init("opsdeck-tui", "warn");

    let prefs = Prefs::load().unwrap_or_else(|e| {
        tracing::warn!("ignoring unusable preference file: {e}");
        Prefs::default()
    });

    if headless {
        return run_headless(prefs);
    }

    // Restore the terminal even when a draw path panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(prefs);
    restore_terminal()?;
    result
}

fn run(prefs: Prefs) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick = Duration::from_millis(prefs.ui.tick_ms);
    let mut app = App::with_prefs(prefs);
    app.persist_prefs = true;

    loop {
        app.drain_replies();
        app.toasts.tick();

        terminal.draw(|frame| ui::render(frame, &mut app))?;

        if ct_event::poll(tick)? {
            if let Event::Key(key) = ct_event::read()? {
                app.on_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Headless mode: one JSON or `:` command per stdin line, JSON events on
/// stdout. No terminal is touched — this is the automation surface.
///
/// Usage: `echo '{"cmd":"query_state"}' | opsdeck-tui --headless`
fn run_headless(prefs: Prefs) -> Result<()> {
    let mut app = App::with_prefs(prefs);

    emit_event(&serde_json::json!({
        "event": "started",
        "tabs": app::TAB_NAMES.len(),
    }));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Deliver any simulated replies that arrived between commands.
        let before = app.messages.len() + app.detail_chat.len();
        app.drain_replies();
        let delivered = app.messages.len() + app.detail_chat.len() - before;
        if delivered > 0 {
            emit_event(&serde_json::json!({
                "event": "assistant_reply",
                "delivered": delivered,
            }));
        }

        let cmd = command::parse_json_command(line).or_else(|| command::parse_command(line));
        match cmd {
            Some(cmd) => {
                let prev_tab = app.current_tab;
                let result = command::execute_command(&mut app, cmd);
                if app.current_tab != prev_tab {
                    emit_event(&serde_json::json!({
                        "event": "tab_changed",
                        "tab": app.current_tab,
                        "tab_name": app::TAB_NAMES[app.current_tab],
                        "route": app::TAB_ROUTES[app.current_tab],
                    }));
                }
                match result {
                    Some(json_str) => {
                        println!("{json_str}");
                        let _ = io::stdout().flush();
                    }
                    None => emit_event(&serde_json::json!({"event": "ok"})),
                }
            }
            None => emit_event(&serde_json::json!({
                "event": "error",
                "message": format!("unknown command: {line}"),
            })),
        }

        if app.should_quit {
            emit_event(&serde_json::json!({"event": "quit"}));
            break;
        }
    }

    Ok(())
}

fn emit_event(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string(value) {
        println!("{s}");
        let _ = io::stdout().flush();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
