use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use std::time::Duration;

use token_forge::app_time::now;
use token_forge::config::{DEPLOY, FORM};
use token_forge::models::preview::contract_name;
use token_forge::models::{ConfigUpdate, Decimals, DeploymentResult, Feature, TokenConfig, TokenPreview};
use token_forge::{DeploySimulator, RandomAddressSource};

/// Run the simulated token deployment without the GUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Token name
    #[arg(long, default_value = "")]
    name: String,

    /// Token symbol (uppercased, at most 8 characters)
    #[arg(long, default_value = "")]
    symbol: String,

    /// Total supply (non-digits are dropped)
    #[arg(long, default_value = FORM.default_supply)]
    supply: String,

    /// One of 18, 8, 6 or 0
    #[arg(long, default_value_t = Decimals::Eighteen, value_parser = parse_decimals)]
    decimals: Decimals,

    #[arg(long)]
    burnable: bool,

    #[arg(long)]
    mintable: bool,

    #[arg(long)]
    pausable: bool,

    /// Simulated deployment time in milliseconds
    #[arg(long, default_value_t = DEPLOY.delay_ms)]
    delay_ms: u64,

    /// Seed the address generator for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

fn parse_decimals(raw: &str) -> Result<Decimals, String> {
    let value: u8 = raw.parse().map_err(|e| format!("{raw:?} is not a number: {e}"))?;
    Decimals::try_from(value).map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a TokenConfig,
    contract: String,
    deployment: &'a DeploymentResult,
    explorer_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = build_config(&args);
    if !config.is_deployable() {
        bail!(
            "name, symbol and supply are required (name={:?}, symbol={:?}, supply={:?})",
            config.name,
            config.symbol,
            config.supply
        );
    }

    let preview = TokenPreview::from_config(&config);
    if !args.json {
        print_preview(&preview);
    }

    let source = match args.seed {
        Some(seed) => RandomAddressSource::seeded(seed),
        None => RandomAddressSource::from_entropy(),
    };
    let mut simulator = DeploySimulator::new(source, Duration::from_millis(args.delay_ms));

    let trigger = simulator.trigger(&config, now());
    if !trigger.is_started() {
        bail!("Deployment did not start: {}", trigger);
    }
    if !args.json {
        println!("⏳ Deploying to {}...", DEPLOY.network_name);
    }

    let result = run_to_completion(&mut simulator).await?;

    if args.json {
        let report = Report {
            config: &config,
            contract: contract_name(&config),
            explorer_url: result.address.explorer_url(),
            deployment: &result,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!(
            "✅ {} is now live on {}",
            result.token_name, DEPLOY.network_name
        );
        println!("   Contract address: {}", result.address);
        println!("   {}", result.address.explorer_url());
    }
    Ok(())
}

fn build_config(args: &Args) -> TokenConfig {
    let mut config = TokenConfig::default();
    config.apply(ConfigUpdate::Name(args.name.clone()));
    config.apply(ConfigUpdate::Symbol(args.symbol.clone()));
    config.apply(ConfigUpdate::Supply(args.supply.clone()));
    config.apply(ConfigUpdate::Decimals(args.decimals));
    config.apply(ConfigUpdate::Feature(Feature::Burnable, args.burnable));
    config.apply(ConfigUpdate::Feature(Feature::Mintable, args.mintable));
    config.apply(ConfigUpdate::Feature(Feature::Pausable, args.pausable));
    config
}

/// Sleeps until the simulator's deadline and polls it, the same way the GUI
/// frame loop does.
async fn run_to_completion(simulator: &mut DeploySimulator) -> Result<DeploymentResult> {
    loop {
        let now = now();
        if let Some(result) = simulator.poll(now) {
            return Ok(result.clone());
        }
        let wait = simulator
            .remaining(now)
            .context("Simulator stopped deploying without a result")?;
        tokio::time::sleep(wait.max(Duration::from_millis(1))).await;
    }
}

fn print_preview(preview: &TokenPreview) {
    println!("[{}] {} {}", preview.icon_initial, preview.display_name, preview.display_symbol);
    println!("    Supply: {}   Decimals: {}", preview.formatted_supply, preview.decimals);

    let badges: Vec<&str> = preview.active_badges().map(|b| b.label()).collect();
    if !badges.is_empty() {
        println!("    Features: {}", badges.join(", "));
    }
    println!();
    println!("{}", preview.code_snippet);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_are_coerced_like_the_form() {
        let args = Args::parse_from([
            "simulate_deploy",
            "--name",
            "Test Coin",
            "--symbol",
            "test",
            "--supply",
            "abc123000",
            "--pausable",
        ]);
        let config = build_config(&args);

        assert_eq!(config.symbol, "TEST");
        assert_eq!(config.supply, "123000");
        assert_eq!(config.decimals, Decimals::Eighteen);
        assert!(config.pausable && !config.burnable);
        assert!(config.is_deployable());
    }

    #[test]
    fn only_offered_decimals_parse() {
        assert_eq!(parse_decimals("6"), Ok(Decimals::Six));
        assert!(parse_decimals("7").is_err());
        assert!(parse_decimals("eighteen").is_err());
        assert!(Args::try_parse_from(["simulate_deploy", "--decimals", "9"]).is_err());
    }

    #[tokio::test]
    async fn waits_out_the_delay() {
        let args = Args::parse_from(["simulate_deploy", "--name", "A", "--symbol", "a"]);
        let config = build_config(&args);
        let mut simulator =
            DeploySimulator::new(RandomAddressSource::seeded(5), Duration::from_millis(20));

        assert!(simulator.trigger(&config, now()).is_started());
        let result = run_to_completion(&mut simulator).await.unwrap();
        assert_eq!(result.token_name, "A");
        assert!(result.elapsed >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn idle_simulator_is_an_error() {
        let mut simulator =
            DeploySimulator::new(RandomAddressSource::seeded(5), Duration::from_millis(20));
        assert!(run_to_completion(&mut simulator).await.is_err());
    }
}
