use clap::{Parser, Subcommand};
use modeltier::estimate::{requirement_checks, Classifier, ModelReport};
use modeltier::storage::settings::{load_settings, load_settings_from, EstimatorSettings};
use modeltier::storage::snapshot::{load_snapshot, snapshot_schema};
use modeltier::storage::StorageError;
use modeltier::system::probe_host;
use modeltier::types::SystemCapabilities;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "modeltier")]
#[command(about = "Estimate how well local language models will run on this machine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read system capabilities from a JSON snapshot instead of probing the host
    #[arg(long, global = true, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Use a specific settings file
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate one or more models against the system
    Classify {
        /// Model identifiers, e.g. Llama-3-8B-Instruct-q4f16_1
        #[arg(required = true)]
        models: Vec<String>,
    },

    /// Show the memory and device requirements of a model
    Requirements {
        model: String,
    },

    /// Show everything parsed from a model identifier
    Describe {
        model: String,
    },

    /// Rate a group of variants by its best member
    Group {
        /// Variant identifiers
        variants: Vec<String>,
    },

    /// Show the capabilities snapshot in use
    System,

    /// Print the JSON Schema of the snapshot format
    Schema,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modeltier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), StorageError> {
    let settings = match &cli.settings {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };

    match cli.command {
        Commands::Classify { models } => {
            let caps = capabilities(cli.snapshot.as_ref(), &settings)?;
            run_classify(&Classifier::new(settings), &models, &caps, cli.json)
        }
        Commands::Requirements { model } => {
            let caps = capabilities(cli.snapshot.as_ref(), &settings)?;
            run_requirements(&model, &caps, cli.json)
        }
        Commands::Describe { model } => {
            let report = ModelReport::new(&model);
            if cli.json {
                print_json(&report)
            } else {
                println!("{}", report);
                Ok(())
            }
        }
        Commands::Group { variants } => {
            let caps = capabilities(cli.snapshot.as_ref(), &settings)?;
            let classifier = Classifier::new(settings);
            let tier = classifier.aggregate_tier(variants.as_slice(), Some(&caps));
            if cli.json {
                print_json(&serde_json::json!({
                    "variants": variants,
                    "tier": tier,
                    "badge": modeltier::badge_for(tier),
                }))
            } else {
                let badge = modeltier::badge_for(tier);
                println!("{} ({}): {}", badge.label, tier, badge.description);
                Ok(())
            }
        }
        Commands::System => match &cli.snapshot {
            Some(path) => print_json(&load_snapshot(path)?),
            None => print_json(&probe_host(&settings)),
        },
        Commands::Schema => print_json(&snapshot_schema()),
    }
}

fn capabilities(
    snapshot: Option<&PathBuf>,
    settings: &EstimatorSettings,
) -> Result<SystemCapabilities, StorageError> {
    match snapshot {
        Some(path) => load_snapshot(path),
        None => Ok(probe_host(settings).capabilities),
    }
}

fn run_classify(
    classifier: &Classifier,
    models: &[String],
    caps: &SystemCapabilities,
    json: bool,
) -> Result<(), StorageError> {
    let assessments: Vec<_> = models.iter().map(|m| classifier.assess(m, caps)).collect();

    if json {
        return print_json(&assessments);
    }

    let width = models.iter().map(|m| m.len()).max().unwrap_or(0);
    for assessment in &assessments {
        let note = if assessment.recognized {
            ""
        } else {
            "  (unrecognized model, estimate unreliable)"
        };
        println!(
            "{:<width$}  {:<10}  {}{}",
            assessment.identifier,
            assessment.badge.label,
            assessment.badge.description,
            note,
            width = width
        );
    }
    Ok(())
}

fn run_requirements(model: &str, caps: &SystemCapabilities, json: bool) -> Result<(), StorageError> {
    let report = ModelReport::new(model);
    let checks = requirement_checks(&report.requirements, caps);

    if json {
        return print_json(&serde_json::json!({
            "model": model,
            "requirements": report.requirements,
            "checks": checks,
        }));
    }

    let r = &report.requirements;
    println!("Minimum Memory:     {:.1}GB", r.min_memory_gb());
    println!("Recommended Memory: {:.1}GB", r.recommended_memory_gb());
    println!("Preferred Device:   {}", r.preferred_device);
    if let Some(gpu_mb) = r.min_gpu_memory_mb {
        println!("Minimum GPU Memory: {:.1}GB", gpu_mb as f64 / 1024.0);
    }
    println!();
    for check in checks {
        let mark = if check.met { "ok" } else { "!!" };
        println!(
            "[{}] {:<15} {} / {}",
            mark, check.label, check.actual, check.required
        );
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), StorageError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
