use std::sync::Arc;

use lead_form::admin::{AdminPrompt, UserDeletionAction};
use lead_form::api::{FormApi, HttpFormApi, UserId};
use lead_form::cli::Terminal;
use lead_form::config::ClientConfig;
use lead_form::form::StepFormController;
use lead_form::surface::HeadlessPage;

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  lead-form              fill in the intake form");
    eprintln!("  lead-form delete <id>  delete a user record");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    let api: Arc<dyn FormApi> = Arc::new(HttpFormApi::new(&config)?);
    let terminal = Arc::new(Terminal::new());

    eprintln!("📝 Lead Form v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Server: {}", config.base_url);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            let page = Arc::new(HeadlessPage::intake_form());
            let controller = StepFormController::new(api, page.clone());
            terminal.run_form(&controller, &page).await;
        }
        [cmd, id] if cmd == "delete" => {
            let user_id = match id.parse::<i64>() {
                Ok(n) => UserId::Numeric(n),
                Err(_) => UserId::Opaque(id.clone()),
            };
            let prompt: Arc<dyn AdminPrompt> = terminal.clone();
            let action = UserDeletionAction::new(api, prompt);
            let outcome = action.delete_user(user_id).await;
            tracing::debug!(?outcome, "Deletion finished");
        }
        _ => usage(),
    }

    Ok(())
}
