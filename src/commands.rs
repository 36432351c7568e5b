use crate::client::ReleaseNoteClient;
use crate::config::ClientConfig;
use crate::log_debug;
use crate::request::GenerateRequest;
use anyhow::{Context, Result};
use colored::Colorize;

/// Arguments for the `generate` command after CLI parsing
pub struct GenerateArgs {
    pub repo: String,
    pub base_ref: String,
    pub target_ref: String,
    pub preset: Option<String>,
    pub destination: Option<String>,
    /// `None` means "use the config default"; `Some` is an explicit
    /// per-call choice in either direction.
    pub include_why: Option<bool>,
    pub release_url: Option<String>,
    pub endpoint: Option<String>,
    pub timeout: Option<u64>,
    pub full: bool,
    pub quiet: bool,
}

/// Arguments for the `config` command after CLI parsing
#[derive(Default)]
pub struct ConfigArgs {
    pub endpoint: Option<String>,
    pub timeout: Option<u64>,
    pub preset: Option<String>,
    pub destination: Option<String>,
    pub include_why: Option<bool>,
}

/// Fold the per-call `--endpoint`/`--timeout` overrides into the loaded
/// configuration.
fn apply_overrides(mut config: ClientConfig, args: &GenerateArgs) -> ClientConfig {
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_seconds = timeout;
    }
    config
}

/// Build the wire payload: explicit flags win, config fills the gaps.
fn build_request(args: &GenerateArgs, config: &ClientConfig) -> GenerateRequest {
    let preset = args.preset.clone().unwrap_or_else(|| config.preset.clone());
    let destination = args
        .destination
        .clone()
        .unwrap_or_else(|| config.destination.clone());
    let include_why = args.include_why.unwrap_or(config.include_why);

    let mut request = GenerateRequest::new(
        args.repo.clone(),
        preset,
        destination,
        include_why,
        args.base_ref.clone(),
        args.target_ref.clone(),
    );
    if let Some(release_url) = &args.release_url {
        request = request.with_release_url(release_url.clone());
    }
    request
}

/// Handle the `generate` command: merge CLI flags over the loaded config,
/// call the service, and print the draft.
pub async fn handle_generate_command(args: GenerateArgs) -> Result<()> {
    let config = ClientConfig::load().context("Failed to load configuration")?;
    let config = apply_overrides(config, &args);
    let request = build_request(&args, &config);

    let client = ReleaseNoteClient::new(&config).context("Failed to build client")?;
    log_debug!("Using endpoint {}", client.endpoint());

    if !args.quiet {
        println!(
            "{} {} ({}..{})",
            "Drafting release notes for".cyan(),
            request.repo.bold(),
            request.base_ref,
            request.target_ref
        );
    }

    let response = client
        .generate(&request)
        .await
        .context("Release note generation failed")?;

    log_debug!("Response schema version: {:?}", response.schema_version());

    if args.full {
        match response.markdown() {
            Some(markdown) => println!("{markdown}"),
            None => {
                // Older service deployments answer without the markdown
                // field; fall back to the summary output.
                print_summary(&response)?;
            }
        }
    } else {
        print_summary(&response)?;
    }

    Ok(())
}

/// Apply requested configuration changes. Returns true when anything
/// actually changed, so unchanged invocations skip the write.
fn apply_config_changes(config: &mut ClientConfig, args: &ConfigArgs) -> bool {
    let mut changed = false;

    if let Some(endpoint) = &args.endpoint
        && config.endpoint != *endpoint
    {
        config.endpoint = endpoint.clone();
        changed = true;
    }
    if let Some(timeout) = args.timeout
        && config.timeout_seconds != timeout
    {
        config.timeout_seconds = timeout;
        changed = true;
    }
    if let Some(preset) = &args.preset
        && config.preset != *preset
    {
        config.preset = preset.clone();
        changed = true;
    }
    if let Some(destination) = &args.destination
        && config.destination != *destination
    {
        config.destination = destination.clone();
        changed = true;
    }
    if let Some(include_why) = args.include_why
        && config.include_why != include_why
    {
        config.include_why = include_why;
        changed = true;
    }

    changed
}

/// Handle the `config` command: update the stored defaults, then show the
/// effective configuration.
pub fn handle_config_command(args: ConfigArgs) -> Result<()> {
    let mut config = ClientConfig::load().context("Failed to load configuration")?;

    if apply_config_changes(&mut config, &args) {
        config.save().context("Failed to save configuration")?;
        println!("{}", "Configuration updated".green());
    }

    println!("{}", "Current configuration:".cyan().bold());
    println!("  endpoint: {}", config.endpoint);
    println!("  timeout_seconds: {}", config.timeout_seconds);
    println!("  preset: {}", config.preset);
    println!("  destination: {}", config.destination);
    println!("  include_why: {}", config.include_why);

    Ok(())
}

/// Print the two fields the documented API example reads: the schema
/// version, then the `what_shipped` section.
fn print_summary(response: &crate::response::ReleaseNoteResponse) -> Result<()> {
    let schema_version = response
        .schema_version()
        .context("Response is missing its schema version")?;
    let what_shipped = response
        .what_shipped()
        .context("Response has no what_shipped section")?;

    println!("{schema_version}");
    println!("{what_shipped}");
    Ok(())
}
