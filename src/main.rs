mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_client::auth::adapter::outgoing::{FileCredentialStore, HttpAuthApi};
use portfolio_client::auth::application::use_cases::AuthSession;
use portfolio_client::config::AppConfig;
use portfolio_client::portfolio::adapter::incoming::text_page::render_page;
use portfolio_client::portfolio::adapter::outgoing::HttpPortfolioApi;
use portfolio_client::portfolio::application::use_cases::{EditSession, PortfolioViewer, ViewState};
use portfolio_client::shared::api::ApiClient;

use crate::cli::{location_for, Cli, Command};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let locale = cli.locale.unwrap_or(config.locale);
    info!(api = config.api_base_url.as_str(), %locale, "Starting portfolio client");

    let client = ApiClient::new(&config.api_base_url, config.http_timeout)?;
    let portfolio_api = Arc::new(HttpPortfolioApi::new(client.clone()));
    let mut auth = AuthSession::new(
        Arc::new(HttpAuthApi::new(client)),
        Arc::new(FileCredentialStore::new(&config.credentials_path)),
    );
    auth.restore().await;

    match cli.command {
        Command::View { target } => {
            let viewer = PortfolioViewer::new(portfolio_api);
            let location = location_for(target.as_deref());
            viewer
                .load_location(&location, &config.default_slug, locale)
                .await;

            match viewer.state().await {
                ViewState::Ready(portfolio) => print!("{}", render_page(&portfolio, locale)),
                ViewState::NotFound { slug } => println!("No published portfolio at '{}'", slug),
                ViewState::Failed { message } => anyhow::bail!(message),
                ViewState::Idle | ViewState::Loading { .. } => {}
            }
        }
        Command::Login { email, password } => {
            let user = auth.login(&email, &password).await?;
            println!("Signed in as {}", user.email);
        }
        Command::Register {
            email,
            password,
            confirm_password,
        } => {
            let user = auth.register(&email, &password, &confirm_password).await?;
            println!("Account created for {}", user.email);
        }
        Command::Logout => {
            auth.logout().await;
            println!("Signed out");
        }
        Command::Me { origin } => {
            let token = auth
                .token()
                .context("Not signed in; run `portfolio login <email> <password>` first")?;
            let session = EditSession::open(portfolio_api, token).await?;

            match session.saved() {
                Some(portfolio) => {
                    print!("{}", render_page(portfolio, locale));
                    if let Some(url) = session.share_url(&origin) {
                        println!("\nShare link: {}", url);
                    }
                }
                None => println!("You have not created a portfolio yet"),
            }
        }
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
