use std::io::BufRead;
use std::thread;

use dixi_types::{AppEvent, Command, InputEvent};
use kanal::{AsyncReceiver, Sender};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Read stdin on a dedicated thread and forward parsed events.
///
/// A blocking read cannot be cancelled, so the thread is detached; end of
/// input is reported as `AppEvent::Quit`.
pub fn spawn_stdin_reader(event_tx: Sender<AppEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            };

            let Some(event) = parse_line(&line) else {
                tracing::debug!("Ignoring unrecognised input '{}'", line);
                continue;
            };
            if event_tx.send(event).is_err() {
                return;
            }
        }

        tracing::debug!("stdin closed");
        let _ = event_tx.send(AppEvent::Quit);
    })
}

/// Whether stdin is an interactive terminal
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Map one input line to an event.
///
/// Lines starting with `:` are commands; anything else replaces the input
/// text. Returns `None` for unknown or malformed commands.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Some(AppEvent::Input(InputEvent::Submit));
    }

    let Some(command) = line.trim_start().strip_prefix(':') else {
        return Some(AppEvent::Input(InputEvent::Text(line.to_string())));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    let event = match (name, arg) {
        ("enter", "") => AppEvent::Input(InputEvent::Submit),
        ("down", "") => AppEvent::Input(InputEvent::MoveDown),
        ("up", "") => AppEvent::Input(InputEvent::MoveUp),
        ("esc", "") => AppEvent::Input(InputEvent::Escape),
        ("blur", "") => AppEvent::Input(InputEvent::Blur),
        ("focus", "") => AppEvent::Input(InputEvent::Focus),
        ("pick", n) => {
            let n: usize = n.parse().ok()?;
            AppEvent::Input(InputEvent::Pick(n.checked_sub(1)?))
        }
        ("search", q) if !q.is_empty() => AppEvent::Command(Command::Search(q.to_string())),
        ("word", id) => AppEvent::Command(Command::Word(Uuid::parse_str(id).ok()?)),
        ("random", "") => AppEvent::Command(Command::RandomWord),
        ("letters", "") => AppEvent::Command(Command::Letters),
        ("letter", arg) if !arg.is_empty() => parse_letter(arg)?,
        ("stats", "") => AppEvent::Command(Command::Stats),
        ("recent", "") => AppEvent::Command(Command::Recent),
        ("theme", "") => AppEvent::Command(Command::ToggleTheme),
        ("help", "") => AppEvent::Command(Command::Help),
        ("quit" | "q", "") => AppEvent::Quit,
        _ => return None,
    };
    Some(event)
}

/// `L` or `L PAGE`
fn parse_letter(arg: &str) -> Option<AppEvent> {
    let mut parts = arg.split_whitespace();
    let letter = parts.next()?.to_string();
    let page = match parts.next() {
        Some(page) => page.parse::<u32>().ok().filter(|p| *p >= 1)?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(AppEvent::Command(Command::Letter { letter, page }))
}

/// Print everything the app sends until cancelled
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let term = console::Term::stdout();

    loop {
        let output = tokio::select! {
            _ = cancel.cancelled() => break,
            output = app_to_ui_rx.recv() => output?,
        };
        term.write_line(&output)?;
    }

    Ok(())
}
