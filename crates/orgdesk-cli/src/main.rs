//! OrgDesk CLI: drives the organization admin console from stdin.

mod settings;
mod shell;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use orgdesk_console::{OrgConsole, TabSources};
use orgdesk_core::models::tab::OrgTab;
use orgdesk_core::notify::{RecordingNotifier, TracingNotifier};
use orgdesk_store::{InMemoryOrganizationRegistry, InMemorySsoProviderStore, fixtures};
use tracing_subscriber::EnvFilter;

use crate::settings::load_settings;
use crate::shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "orgdesk", about = "Organization admin console")]
struct Cli {
    /// Settings file (default: ./orgdesk.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON seed file with the initial organizations.
    #[arg(long)]
    seed: Option<PathBuf>,
    #[arg(long)]
    initial_tab: Option<OrgTab>,
    #[arg(long)]
    default_max_users: Option<u32>,
    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    log_json: bool,
}

fn tab_sources() -> TabSources {
    TabSources {
        users: Box::new(fixtures::users()),
        recent_reports: Box::new(fixtures::recent_reports()),
        scheduled_reports: Box::new(fixtures::scheduled_reports()),
        usage: Box::new(fixtures::usage_metrics()),
        roles: Box::new(fixtures::role_cards()),
        permissions: Box::new(fixtures::permission_matrix()),
    }
}

fn init_tracing(json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("orgdesk=info".parse()?);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        settings.seed_path = Some(seed);
    }
    if let Some(tab) = cli.initial_tab {
        settings.initial_tab = tab;
    }
    if let Some(max) = cli.default_max_users {
        settings.default_max_users = max;
    }
    settings.log_json |= cli.log_json;

    init_tracing(settings.log_json)?;
    tracing::info!(?settings, "Starting OrgDesk console");

    let recorder = RecordingNotifier::new();
    let notifier = (TracingNotifier, recorder.clone());

    let registry =
        InMemoryOrganizationRegistry::from_config(&settings.store_config(), notifier.clone())
            .context("failed to initialize organization registry")?;
    let console = OrgConsole::new(
        registry,
        InMemorySsoProviderStore::seeded(),
        notifier,
        tab_sources(),
        settings.console_config(),
    );

    let mut shell = Shell::new(console, recorder);
    shell.run(io::stdin().lock(), io::stdout().lock())?;

    tracing::info!(
        organizations = shell.console().registry().len(),
        "OrgDesk console stopped."
    );
    Ok(())
}
