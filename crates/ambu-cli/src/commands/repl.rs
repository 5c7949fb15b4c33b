use std::borrow::Cow::{self, Borrowed, Owned};
use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::sync::mpsc;

use ambu_application::Submission;
use ambu_core::messages;
use ambu_core::search::Engine;

use super::{require_session, session_admits};
use crate::app::{App, Online};
use crate::render;

/// Completion, highlighting and hints for slash commands.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/details".to_string(),
                "/engine".to_string(),
                "/logout".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Interactive search loop.
///
/// Lookups run in background tasks so a new query can be typed while an
/// older one is still in flight; only the latest one's outcome is printed.
/// The guard is re-checked on the session subscription before every search.
pub async fn run(app: App) -> Result<()> {
    require_session(&app)?;
    let online = app.connect()?;
    let session = app.session.subscribe();

    let (result_tx, mut result_rx) = mpsc::channel::<Submission>(32);
    let printer = tokio::spawn(async move {
        while let Some(submission) = result_rx.recv().await {
            match submission {
                Submission::Settled(phase) => render::phase(&phase),
                Submission::Superseded => tracing::debug!("Dropped superseded search outcome"),
                Submission::Ignored => {}
            }
        }
    });

    let mut rl = Editor::<CliHelper, DefaultHistory>::new()?;
    rl.set_helper(Some(CliHelper::new()));

    let mut engine = online.search.default_engine();

    println!("{}", "=== AMBU ===".bright_magenta().bold());
    println!("{}", messages::REPL_HELP.bright_black());
    println!();

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", messages::GOODBYE.bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Some(command) = trimmed.strip_prefix('/') {
                    let mut parts = command.split_whitespace();
                    match (parts.next(), parts.next()) {
                        (Some("details"), _) => toggle_details(&online),
                        (Some("engine"), None) => {
                            println!("{}", messages::engine_label(engine).bright_black());
                        }
                        (Some("engine"), Some(name)) => match Engine::from_str(name) {
                            Ok(selected) => {
                                engine = selected;
                                println!("{}", messages::engine_label(engine).bright_green());
                            }
                            Err(_) => println!("{}", messages::unknown_engine(name).red()),
                        },
                        (Some("logout"), _) => {
                            online.login.logout()?;
                            println!("{}", messages::LOGGED_OUT.bright_green());
                            break;
                        }
                        _ => println!("{}", messages::UNKNOWN_COMMAND.bright_black()),
                    }
                    continue;
                }

                if !session_admits(&session) {
                    println!("{}", messages::SESSION_REQUIRED.yellow());
                    break;
                }

                println!("{}", messages::SEARCH_PENDING.bright_black());

                let tx = result_tx.clone();
                let search = online.search.clone();
                let query = trimmed.to_string();
                tokio::spawn(async move {
                    let submission = search.submit(&query, Some(engine)).await;
                    let _ = tx.send(submission).await;
                });
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", messages::REPL_INTERRUPTED.yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", messages::REPL_EOF.bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Errore: {:?}", err).red());
                break;
            }
        }
    }

    drop(result_tx);
    let _ = printer.await;

    Ok(())
}

fn toggle_details(online: &Online) {
    let open = online.search.toggle_details();
    let panel = online.search.snapshot();

    if !open {
        println!("{}", messages::DETAILS_HIDDEN.bright_black());
    } else if panel.visible_rows().is_none() {
        println!("{}", messages::DETAILS_UNAVAILABLE.bright_black());
    } else {
        render::details(&panel);
    }
}
