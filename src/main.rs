//! Command-line client for Short.ly.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a short code and "navigate" to its destination
//! shortly resolve abc123
//!
//! # Shorten a URL (requires API_TOKEN)
//! shortly shorten https://example.com/very/long/path --code promo24
//!
//! # Dashboard
//! shortly urls --page 2 --search docs
//! shortly stats
//! shortly delete abc123
//! ```
//!
//! # Environment Variables
//!
//! See [`shortly_client::config`] for the full list. `API_TOKEN` is required
//! for every command except `resolve`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

use shortly_client::application::services::{
    DashboardService, RedirectView, ResolverService, ShortenerService,
};
use shortly_client::config::{self, Config};
use shortly_client::domain::entities::{FREE_TIER_URL_LIMIT, Tier, User, ViewState};
use shortly_client::domain::ports::{SessionProvider, UrlApi};
use shortly_client::infrastructure::http::HttpUrlApi;
use shortly_client::infrastructure::navigation::TerminalNavigator;
use shortly_client::infrastructure::session::StaticSession;
use shortly_client::telemetry;

/// Short.ly command-line client.
#[derive(Parser)]
#[command(name = "shortly")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a short code and navigate to its destination
    Resolve {
        /// The short code to resolve
        code: String,

        /// Pause before navigating, in milliseconds (default: REDIRECT_DELAY_MS)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Do not offer to retry on failure
        #[arg(long)]
        no_prompt: bool,
    },

    /// Shorten a URL
    Shorten {
        /// The original URL
        url: String,

        /// Custom short code (6-8 letters and numbers)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// List your shortened URLs
    Urls {
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[arg(short, long, default_value_t = 10)]
        limit: u32,

        /// Filter by original URL or code
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show usage statistics
    Stats,

    /// Delete a shortened URL
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    let api = Arc::new(
        HttpUrlApi::new(&config.api_base_url, config.request_timeout())
            .context("Failed to create API client")?,
    );

    match cli.command {
        Commands::Resolve {
            code,
            delay_ms,
            no_prompt,
        } => {
            let delay = delay_ms.map_or_else(|| config.redirect_delay(), Duration::from_millis);
            handle_resolve(&config, api, &code, delay, !no_prompt).await?
        }
        Commands::Shorten { url, code } => {
            let session = Arc::new(build_session(&config, api.as_ref()).await);
            handle_shorten(api, session, &url, code.as_deref()).await?
        }
        Commands::Urls {
            page,
            limit,
            search,
        } => {
            let dashboard = DashboardService::new(api, Arc::new(config_session(&config)));
            handle_urls(&dashboard, page, limit, &search).await?
        }
        Commands::Stats => {
            let dashboard = DashboardService::new(api, Arc::new(config_session(&config)));
            handle_stats(&dashboard).await?
        }
        Commands::Delete { code, yes } => {
            let dashboard = DashboardService::new(api, Arc::new(config_session(&config)));
            handle_delete(&dashboard, &code, yes).await?
        }
    }

    Ok(())
}

/// Session from configuration alone, without contacting the backend.
fn config_session(config: &Config) -> StaticSession {
    match &config.api_token {
        Some(token) => StaticSession::authenticated(
            User::new(config.account_email.clone(), config.account_tier, 0),
            token.clone(),
        ),
        None => StaticSession::anonymous(),
    }
}

/// Session whose URL count is read from the dashboard, for the tier limit check.
async fn build_session<A: UrlApi>(config: &Config, api: &A) -> StaticSession {
    let session = config_session(config);
    let Some(token) = &config.api_token else {
        return session;
    };

    match api.stats(token).await {
        Ok(stats) => session.with_url_count(stats.total_urls),
        Err(e) => {
            tracing::warn!("Could not read URL count: {}", e);
            session
        }
    }
}

/// Resolves a short code, then either waits for the navigation or shows the error.
///
/// # Flow
///
/// 1. Resolve and present in a fresh [`RedirectView`]
/// 2. Redirect: wait for the delayed navigation; Ctrl-C tears the view down
/// 3. Error: show the message, then offer "Try again" (a new view) or go home
async fn handle_resolve(
    config: &Config,
    api: Arc<HttpUrlApi>,
    code: &str,
    delay: Duration,
    interactive: bool,
) -> Result<()> {
    let resolver = ResolverService::new(api, config.request_timeout());
    let navigator = Arc::new(TerminalNavigator::stdout(config.app_url.clone()));

    loop {
        println!("{}", "Redirecting...".bright_blue().bold());
        println!("  Processing short code: {}", code.cyan());

        let mut view = RedirectView::load(&resolver, code, navigator.clone(), delay).await;
        let model = view.view_model();

        match model.state {
            ViewState::Redirecting => {
                println!("  Taking you to your destination in just a moment");

                let navigated = tokio::select! {
                    fired = view.wait_for_navigation() => fired,
                    _ = tokio::signal::ctrl_c() => false,
                };

                if !navigated {
                    view.teardown();
                    println!("{}", "Cancelled".red());
                }
                return Ok(());
            }
            ViewState::Error => {
                println!();
                println!("{}", "Oops! Something went wrong".red().bold());
                if let Some(message) = &model.error_message {
                    println!("  {}", message);
                }
                println!("  Short Code: {}", model.short_code.cyan());
                println!();

                let retry = interactive
                    && Confirm::new()
                        .with_prompt("Try again?")
                        .default(true)
                        .interact()?;

                if !retry {
                    view.go_home();
                    anyhow::bail!(
                        "{}",
                        model.error_message.as_deref().unwrap_or("Failed to redirect")
                    );
                }
            }
            ViewState::Pending => anyhow::bail!("Resolution did not settle"),
        }
    }
}

async fn handle_shorten(
    api: Arc<HttpUrlApi>,
    session: Arc<StaticSession>,
    url: &str,
    code: Option<&str>,
) -> Result<()> {
    let shortener = ShortenerService::new(api, session.clone());

    let shortened = shortener
        .shorten(url, code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "URL shortened successfully!".green().bold());
    println!("  Original: {}", shortened.original_url.bright_black());
    println!("  Short:    {}", shortened.short_url.bright_yellow().bold());

    if let Some(user) = session.current_user()
        && user.tier == Tier::Free
    {
        println!(
            "  URLs created: {}/{} (Free tier limit)",
            user.url_count + 1,
            FREE_TIER_URL_LIMIT
        );
    }

    Ok(())
}

/// Lists URLs in a table.
///
/// # Output Format
///
/// ```text
///   Code       Clicks  Created      Original URL
///   ─────────────────────────────────────────────────────────────
///   abc123     7       Mar 01, 2024 https://example.com/very/long/p...
/// ```
async fn handle_urls(
    dashboard: &DashboardService<HttpUrlApi, StaticSession>,
    page: u32,
    limit: u32,
    search: &str,
) -> Result<()> {
    let urls = dashboard
        .list_urls(page, limit, search)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch URLs: {}", e))?;

    if urls.items.is_empty() {
        println!("{}", "  No URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<7} {:<12} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for url in &urls.items {
        println!(
            "  {:<10} {:<7} {:<12} {}",
            url.short_code.cyan(),
            url.clicks,
            url.created_at.format("%b %d, %Y").to_string().bright_black(),
            truncate(&url.original_url, 50)
        );
    }

    println!();
    println!(
        "  Showing page {} of {} ({} total)",
        urls.page, urls.pages, urls.total
    );

    Ok(())
}

async fn handle_stats(dashboard: &DashboardService<HttpUrlApi, StaticSession>) -> Result<()> {
    let stats = dashboard
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch statistics: {}", e))?;

    println!("{}", "Statistics".bright_blue().bold());
    println!("  Total URLs:     {}", stats.total_urls.to_string().bold());
    println!("  Total Clicks:   {}", stats.total_clicks.to_string().bold());
    println!("  Avg. Clicks:    {}", stats.average_clicks());
    println!("  Top URL Clicks: {}", stats.top_clicks());

    if !stats.recent_clicks.is_empty() {
        println!();
        println!("{}", "  Recent clicks".bright_white());
        for day in &stats.recent_clicks {
            println!("  {:<12} {}", day.date.bright_black(), day.clicks);
        }
    }

    Ok(())
}

async fn handle_delete(
    dashboard: &DashboardService<HttpUrlApi, StaticSession>,
    code: &str,
    skip_confirm: bool,
) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete short URL '{}'?", code))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    dashboard
        .delete_url(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete URL: {}", e))?;

    println!("{}", "URL deleted successfully".green());
    Ok(())
}

fn truncate(url: &str, length: usize) -> String {
    if url.chars().count() <= length {
        return url.to_string();
    }
    let head: String = url.chars().take(length).collect();
    format!("{head}...")
}
