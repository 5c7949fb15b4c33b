use anyhow::Result;
use ambu_application::Submission;
use ambu_core::messages;
use ambu_core::search::Engine;
use colored::Colorize;

use super::require_session;
use crate::app::App;
use crate::render;

pub async fn run(app: &App, query: &str, engine: Option<Engine>, details: bool) -> Result<()> {
    require_session(app)?;
    let online = app.connect()?;
    let search = &online.search;

    let engine = engine.unwrap_or(search.default_engine());
    println!(
        "{}",
        format!("{} ({})", messages::SEARCH_PENDING, messages::engine_label(engine)).bright_black()
    );

    match search.submit(query, Some(engine)).await {
        Submission::Ignored => println!("{}", messages::SEARCH_EMPTY.yellow()),
        Submission::Superseded => {}
        Submission::Settled(phase) => {
            render::phase(&phase);
            if details {
                search.toggle_details();
                render::details(&search.snapshot());
            }
        }
    }
    Ok(())
}
