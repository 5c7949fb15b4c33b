use anyhow::{Result, bail};
use colored::Colorize;
use dialoguer::{Input, Password};
use ambu_core::messages;

use crate::app::App;

pub async fn run(app: &App, username: Option<String>) -> Result<()> {
    let online = app.connect()?;

    let username = match username {
        Some(username) => username,
        None => Input::<String>::new()
            .with_prompt(messages::PROMPT_USERNAME)
            .interact_text()?,
    };
    let password = Password::new()
        .with_prompt(messages::PROMPT_PASSWORD)
        .interact()?;

    if username.trim().is_empty() || password.is_empty() {
        bail!(messages::CREDENTIALS_REQUIRED);
    }

    println!("{}", messages::LOGIN_IN_PROGRESS.bright_black());
    match online.login.submit(&username, &password).await {
        Ok(_) => {
            println!("{}", messages::LOGIN_SUCCEEDED.bright_green());
            Ok(())
        }
        Err(failure) => bail!("{}", failure),
    }
}
