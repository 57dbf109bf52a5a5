use clap::{Parser, Subcommand};
use ghosthost::config::{self, GeneratorConfig};
use ghosthost::presets::{Voice, sample_record};
use ghosthost::record::BusinessRecord;
use ghosthost::server::ToolServer;
use ghosthost::template::{Context, expand};
use ghosthost::validate::{ValidationMode, validate};
use ghosthost::{artifacts, assets, output};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ghosthost")]
#[command(about = "Generate a ready-to-upload website from a business description")]
#[command(long_about = "\
Generate a ready-to-upload website from a business description

Input is a JSON record (use '-' to read it from stdin):

  {
    \"business_name\": \"Moonlight Café\",
    \"business_type\": \"coffee_shop\",
    \"tagline\": \"Coffee so dark it might wake the dead\",
    \"short_description\": \"A mysteriously cozy café...\",
    \"contact_whatsapp\": \"628123456789\",
    \"instagram_handle\": \"moonlight_cafe\",
    \"theme_choice\": \"kiroween\",
    \"menu_items\": [{ \"name\": \"Midnight Espresso\", \"price\": \"Rp 15,000\" }]
  }

Output (in generated/ by default):

  index.html                   Landing page
  styles.css                   Theme stylesheet (classic or kiroween)
  menu.json                    Menu data
  deployment-instructions.txt  How to publish the files

Run 'ghosthost preset coffee_shop' for a starter record and
'ghosthost gen-config' for a documented ghosthost.toml.")]
#[command(version)]
struct Cli {
    /// Config file (default: ./ghosthost.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Flags shared by commands that check a record.
#[derive(clap::Args, Clone)]
struct CheckArgs {
    /// Business record JSON file, or '-' for stdin
    input: PathBuf,

    /// Also check contact formats and field lengths
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a record and write the website files
    Generate {
        #[command(flatten)]
        check: CheckArgs,

        /// Output directory (overrides output.dir)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Directory with templates/ and themes/ (overrides assets_dir)
        #[arg(long = "assets")]
        assets_dir: Option<PathBuf>,
    },
    /// Validate a record without generating anything
    Validate {
        #[command(flatten)]
        check: CheckArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Expand a template file with JSON data and print the result
    Render {
        /// Template file
        template: PathBuf,
        /// JSON object file, or '-' for stdin
        data: PathBuf,
    },
    /// Run the JSON-RPC tool server on stdin/stdout
    Serve,
    /// Print a starter record for a business type, or list business types
    Preset {
        /// Business type key, e.g. coffee_shop
        business_type: Option<String>,

        #[arg(long, value_enum, default_value_t = Voice::Haunted)]
        voice: Voice,
    },
    /// Print a stock ghosthost.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            check,
            out,
            assets_dir,
        } => {
            let config = resolve_config(cli.config.as_deref())?;
            let record = read_record(&check.input)?;
            let report = validate(&record, validation_mode(&config, check.strict));
            if !report.valid {
                output::print_validation_output(&report);
                std::process::exit(1);
            }

            let assets_dir = assets_dir.or(config.assets_dir);
            let source = assets::source_for(assets_dir.as_deref());
            let bundle = match artifacts::build(&record, source.as_ref()) {
                Ok(bundle) => bundle,
                Err(e) => {
                    tracing::error!(error = %e, "website generation failed");
                    eprintln!("Failed to generate website");
                    std::process::exit(1);
                }
            };

            let out_dir = out.unwrap_or(config.output.dir);
            bundle.write_to(&out_dir)?;
            output::print_generate_output(&bundle, &out_dir);
        }
        Command::Validate { check, json } => {
            let config = resolve_config(cli.config.as_deref())?;
            let record = read_record(&check.input)?;
            let report = validate(&record, validation_mode(&config, check.strict));
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_validation_output(&report);
            }
            if !report.valid {
                std::process::exit(1);
            }
        }
        Command::Render { template, data } => {
            let template = std::fs::read_to_string(&template)?;
            let data: serde_json::Value = serde_json::from_str(&read_input(&data)?)?;
            print!("{}", expand(&template, &Context::from_json(data)?)?);
        }
        Command::Serve => {
            let config = resolve_config(cli.config.as_deref())?;
            let server = ToolServer::new(
                assets::source_for(config.assets_dir.as_deref()),
                config.output.dir.clone(),
                config.validation_mode(),
            );
            let stdin = std::io::stdin();
            server.serve(stdin.lock(), std::io::stdout())?;
        }
        Command::Preset {
            business_type,
            voice,
        } => match business_type {
            Some(key) => {
                let record = sample_record(&key, voice);
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
            None => output::print_preset_list(),
        },
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `--config` when given, otherwise `ghosthost.toml` in the working directory.
fn resolve_config(path: Option<&Path>) -> Result<GeneratorConfig, config::ConfigError> {
    match path {
        Some(path) => config::load_config_file(path),
        None => config::load_config(Path::new(".")),
    }
}

fn validation_mode(config: &GeneratorConfig, strict_flag: bool) -> ValidationMode {
    if strict_flag {
        ValidationMode::Strict
    } else {
        config.validation_mode()
    }
}

fn read_input(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn read_record(path: &Path) -> Result<BusinessRecord, Box<dyn std::error::Error>> {
    let json = read_input(path)?;
    Ok(BusinessRecord::from_json_str(&json)?)
}
