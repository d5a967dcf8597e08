//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `ideabox_core` linkage with a short create/update scenario.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `ideabox [ABSOLUTE_LOG_DIR]`

use ideabox_core::{IdeaKind, IdeaService, IdeaUpdate, LogNotificationService, NewIdea};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("ideabox: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    if let Some(log_dir) = std::env::args().nth(1) {
        ideabox_core::init_logging(ideabox_core::default_log_level(), &log_dir)?;
    }
    println!("ideabox_core version={}", ideabox_core::core_version());

    let mut service = IdeaService::in_memory(LogNotificationService::new());
    let todo = service.create(
        IdeaKind::ToDo,
        NewIdea::new("A todo description", "My todo").with_done(false),
    );
    service.create(
        IdeaKind::Concept,
        NewIdea::new("A concept", "Concept 1").with_references(["www.site.com"]),
    );

    service
        .update(todo.id(), IdeaUpdate::default().done(true))
        .await
        .map_err(|err| err.to_string())?;
    log::info!("event=cli_scenario module=cli status=ok ideas={}", service.len());

    for kind in IdeaKind::ALL {
        for idea in service.get_all_by_type(kind) {
            let line = serde_json::to_string(&idea).map_err(|err| err.to_string())?;
            println!("{line}");
        }
    }
    Ok(())
}
