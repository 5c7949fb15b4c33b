use anyhow::Result;
use colored::Colorize;
use ambu_core::messages;

use crate::app::App;

/// Needs only the local session; works with no service configured.
pub fn run(app: &App) -> Result<()> {
    app.session.clear()?;
    println!("{}", messages::LOGGED_OUT.bright_green());
    Ok(())
}
