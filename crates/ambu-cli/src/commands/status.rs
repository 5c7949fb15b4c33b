use colored::Colorize;
use ambu_core::messages;

use crate::app::App;

pub fn run(app: &App) {
    let service = app
        .config
        .resolve_base_url()
        .unwrap_or_else(|err| format!("{} ({})", messages::SERVICE_UNCONFIGURED, err));

    println!("{} {}", messages::STATUS_SERVICE.bright_black(), service);
    println!(
        "{} {}",
        messages::STATUS_ENVIRONMENT.bright_black(),
        app.config.environment
    );
    println!(
        "{} {}",
        messages::STATUS_ENGINE.bright_black(),
        messages::engine_label(app.config.default_engine)
    );
    println!(
        "{} {}",
        messages::STATUS_CONFIG.bright_black(),
        app.paths.config_file().display()
    );

    if app.session.is_authenticated() {
        let since = app.session.saved_at().map(|at| at.to_rfc3339());
        println!(
            "{} {}",
            messages::STATUS_SESSION.bright_black(),
            messages::session_active(since.as_deref()).green()
        );
    } else {
        println!(
            "{} {}",
            messages::STATUS_SESSION.bright_black(),
            messages::SESSION_NONE.yellow()
        );
    }
}
