use crate::display::{
    print_out, render_breach_details, render_catalog, render_json, render_results,
    render_summary,
};
use anyhow::anyhow;
use breachcheck_breaches::{build_summary, BreachChecker, BreachRecord, BreachSummary};
use breachcheck_core::{resolve_api_key, AppConfig, BreachCheckError, EmailAddress, OutputFormat};
use breachcheck_hibp::HibpClient;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Global command-line options shared by every subcommand.
pub struct Options {
    pub config_path: PathBuf,
    pub json: bool,
    pub api_url: Option<String>,
}

/// Options merged with the loaded configuration file.
struct Context {
    config: AppConfig,
    json: bool,
    api_url: Option<String>,
}

impl Context {
    /// Runs the first-run helper, then loads the config file.
    fn load(opts: &Options) -> anyhow::Result<Self> {
        ensure_config_template(&opts.config_path);
        let config = AppConfig::load_from(&opts.config_path).map_err(BreachCheckError::from)?;
        Ok(Self {
            json: opts.json || config.general.output_format == OutputFormat::Json,
            api_url: opts.api_url.clone(),
            config,
        })
    }
}

#[derive(Serialize)]
struct CheckReport<'a> {
    email: &'a str,
    total: usize,
    breaches: &'a [BreachRecord],
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    email: &'a str,
    summary: &'a BreachSummary,
}

fn build_checker(ctx: &Context) -> anyhow::Result<BreachChecker> {
    let api_key = resolve_api_key(&ctx.config).map_err(|e| anyhow!("Configuration error: {e}"))?;

    let mut client =
        HibpClient::new(api_key).map_err(|e| anyhow!("Configuration error: {e}"))?;
    if let Some(url) = &ctx.api_url {
        client = client.with_base_url(url.as_str());
    }
    Ok(BreachChecker::new(client))
}

pub async fn check(
    opts: &Options,
    email: &str,
    truncate: bool,
    summary: bool,
    mask: bool,
) -> anyhow::Result<()> {
    let email = EmailAddress::parse(email)?;
    let ctx = Context::load(opts)?;
    let checker = build_checker(&ctx)?;
    let truncate = truncate || ctx.config.general.default_truncate;
    let shown = if mask {
        email.masked()
    } else {
        email.to_string()
    };

    if !ctx.json {
        println!("Checking breaches for: {shown}");
        println!("Please wait...");
    }

    let records = checker
        .check_email(&email, truncate)
        .await
        .map_err(|e| anyhow!("Error checking breaches: {e}"))?;

    let text = match (summary, ctx.json) {
        (true, true) => render_json(SummaryReport {
            email: &shown,
            summary: &build_summary(&records),
        })?,
        (true, false) => render_summary(&shown, &build_summary(&records)),
        (false, true) => render_json(CheckReport {
            email: &shown,
            total: records.len(),
            breaches: &records,
        })?,
        (false, false) => render_results(&shown, &records),
    };
    if ctx.json {
        println!("{text}");
    } else {
        print_out(&text);
    }
    Ok(())
}

pub async fn breach(opts: &Options, name: &str) -> anyhow::Result<()> {
    let ctx = Context::load(opts)?;
    let checker = build_checker(&ctx)?;
    let record = checker
        .breach_detail(name.trim())
        .await
        .map_err(|e| anyhow!("Error fetching breach: {e}"))?;

    if ctx.json {
        println!("{}", render_json(&record)?);
    } else {
        print_out(&render_breach_details(&record));
    }
    Ok(())
}

pub async fn catalog(opts: &Options, limit: Option<usize>) -> anyhow::Result<()> {
    let ctx = Context::load(opts)?;
    let checker = build_checker(&ctx)?;
    let records = checker
        .catalog()
        .await
        .map_err(|e| anyhow!("Error fetching breach catalog: {e}"))?;

    if ctx.json {
        let shown = limit.unwrap_or(records.len()).min(records.len());
        println!("{}", render_json(&records[..shown])?);
    } else {
        print_out(&render_catalog(&records, limit));
    }
    Ok(())
}

/// Write the config template. Unlike the first-run helper, failures here
/// are reported.
pub fn init(path: &Path) -> anyhow::Result<()> {
    if AppConfig::write_template(path).map_err(BreachCheckError::from)? {
        eprintln!("Configuration template created at: {}", path.display());
        println!("Please edit the file and add your HIBP API key.");
    } else {
        println!("Configuration already exists at: {}", path.display());
    }
    Ok(())
}

/// First-run helper: create a placeholder config if none exists. Best-effort;
/// the key may still come from the environment.
fn ensure_config_template(path: &Path) {
    match AppConfig::write_template(path) {
        Ok(true) => eprintln!("Configuration template created at: {}", path.display()),
        Ok(false) => {}
        Err(e) => {
            warn!("Could not create config template at {}: {e}", path.display());
            eprintln!(
                "Note: could not create configuration template at {}: {e}",
                path.display()
            );
        }
    }
}
