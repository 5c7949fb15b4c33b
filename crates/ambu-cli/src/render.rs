use colored::Colorize;

use ambu_application::{QueryPhase, SearchPanel};
use ambu_core::disclosure::DetailRow;
use ambu_core::messages;
use ambu_core::search::SearchResult;

pub fn phase(phase: &QueryPhase) {
    match phase {
        QueryPhase::Idle => {}
        QueryPhase::Pending { .. } => println!("{}", messages::SEARCH_PENDING.bright_black()),
        QueryPhase::Failed { message } => println!("{}", message.red()),
        QueryPhase::Settled(result) => search_result(result),
    }
}

fn search_result(result: &SearchResult) {
    match result {
        SearchResult::OffTopic => println!("{}", messages::OFF_TOPIC.yellow()),
        SearchResult::NotFound => println!("{}", messages::NOT_FOUND.yellow()),
        SearchResult::Found {
            query_echo,
            phone_number,
            primary_source,
            ..
        } => {
            println!("{}", query_echo.bright_black());
            println!("{}", phone_number.bright_green().bold());
            println!("{}", primary_source.bright_blue());
            if let Some(consensus) = result.consensus() {
                println!("{}", messages::consensus_label(consensus).bright_black());
            }
        }
    }
}

/// Prints the breakdown if the panel has it open.
pub fn details(panel: &SearchPanel) {
    if let Some(rows) = panel.visible_rows() {
        rows.iter().for_each(detail_row);
    }
}

fn detail_row(row: &DetailRow<'_>) {
    let mark = if row.corroborating {
        "✓".green()
    } else {
        "·".bright_black()
    };
    let phone = if row.corroborating {
        row.detail.phone.green()
    } else {
        row.detail.phone.normal()
    };
    println!(
        "  {} {}  {}  {}",
        mark,
        phone,
        row.detail.url.bright_blue(),
        format!("[{}]", row.detail.method).bright_black()
    );
}
