mod registry;
mod workspace;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use primex_core::{
    CardType, DomainSelection, Error as CoreError, GenerationRequest, GeneratorConfig,
    GeneratorKind, PasswordPolicySpec, UsernamePattern,
};
use primex_core::request::{DEFAULT_NUMERIC_HIGH, DEFAULT_NUMERIC_LOW, DEFAULT_PASSWORD_LENGTH};
use primex_generate::{ExportFormat, GenerationError, GenerationSession};
use registry::{ExportTarget, RegistryError, init_logging, write_export};
use thiserror::Error;
use uuid::Uuid;
use workspace::{DEFAULT_SETTINGS_PATH, Settings, WorkspaceError, load_settings, save_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "primex", version, about = "Synthetic combo and test-card generator")]
struct Cli {
    /// Settings file with generation defaults.
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_PATH)]
    config: PathBuf,
    /// Append JSON log events to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate records and export them.
    Generate(GenerateArgs),
    /// List the available generators.
    List,
    /// Write a settings file with default values.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Generator id: email, user, cc, custom1, custom2.
    #[arg(long)]
    kind: Option<GeneratorKind>,
    /// Number of records (clamped to 1..=1000000).
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,
    /// Read the full request from a JSON file instead of flags and settings.
    #[arg(
        long,
        conflicts_with_all = [
            "kind",
            "count",
            "domain",
            "custom_domain",
            "password",
            "password_length",
            "fixed_password",
            "numeric_min",
            "numeric_max",
            "username_pattern",
            "bin",
            "card_type",
        ]
    )]
    request: Option<PathBuf>,
    /// Preset email domain.
    #[arg(long, conflicts_with = "custom_domain")]
    domain: Option<String>,
    /// Custom email domain; a leading '@' is ignored.
    #[arg(long)]
    custom_domain: Option<String>,
    /// Password policy.
    #[arg(long, value_enum)]
    password: Option<PasswordArg>,
    /// Length of random passwords (default 12).
    #[arg(long, requires = "password")]
    password_length: Option<usize>,
    /// Value of fixed passwords; empty means "password123".
    #[arg(long, requires = "password")]
    fixed_password: Option<String>,
    /// Lower bound of numeric passwords (default 10000000).
    #[arg(long, requires = "password", allow_negative_numbers = true)]
    numeric_min: Option<i64>,
    /// Upper bound of numeric passwords (default 99999999).
    #[arg(long, requires = "password", allow_negative_numbers = true)]
    numeric_max: Option<i64>,
    /// Username pattern: random, sequential, dictionary.
    #[arg(long)]
    username_pattern: Option<UsernamePattern>,
    /// Card BIN prefix (4 to 8 digits).
    #[arg(long)]
    bin: Option<String>,
    /// Card type: visa, amex, other.
    #[arg(long)]
    card_type: Option<CardType>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Export format: text, csv, json.
    #[arg(long)]
    format: Option<ExportFormat>,
    /// Output file path.
    #[arg(long, conflicts_with_all = ["out_dir", "stdout"])]
    out: Option<PathBuf>,
    /// Output directory; the file name is generated.
    #[arg(long, conflicts_with = "stdout")]
    out_dir: Option<PathBuf>,
    /// Print the export to stdout instead of writing a file.
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

#[derive(Args, Debug)]
struct InitConfigArgs {
    /// Overwrite an existing settings file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PasswordArg {
    Random,
    Fixed,
    #[value(alias = "numbers")]
    Numeric,
    #[value(alias = "pattern")]
    Patterned,
    Dictionary,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(&cli.config, args),
        Command::List => {
            run_list();
            Ok(())
        }
        Command::InitConfig(args) => {
            save_settings(&cli.config, &Settings::default(), args.force)?;
            println!("settings={}", cli.config.display());
            Ok(())
        }
    }
}

fn run_generate(config_path: &Path, args: GenerateArgs) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let request = build_request(&args, &settings)?;
    let format = args.format.unwrap_or(settings.format);
    let target = if args.stdout {
        ExportTarget::Stdout
    } else if let Some(path) = args.out.clone() {
        ExportTarget::File(path)
    } else {
        ExportTarget::Dir(args.out_dir.clone().unwrap_or_else(|| settings.out_dir.clone()))
    };

    let run_id = Uuid::new_v4().to_string();
    tracing::info!(
        event = "run_started",
        run_id = %run_id,
        generator = %request.kind(),
        seeded = args.seed.is_some()
    );
    let timer = Instant::now();

    let mut session = match args.seed {
        Some(seed) => GenerationSession::seeded(seed),
        None => GenerationSession::from_entropy(),
    };
    let result = session.run(request)?;
    let written = write_export(&result, format, &target, chrono::Utc::now())?;

    if let Some(path) = written {
        println!(
            "written={} lines={} elapsed_ms={}",
            path.display(),
            result.lines.len(),
            result.elapsed_ms
        );
    }

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms);
    Ok(())
}

fn run_list() {
    for kind in GeneratorKind::ALL {
        println!("{:<8} {}", kind.id(), kind.title());
        println!("         {}", kind.description());
    }
}

/// Merge CLI flags over settings into a request; a `--request` file wins outright.
fn build_request(args: &GenerateArgs, settings: &Settings) -> Result<GenerationRequest, CliError> {
    if let Some(path) = &args.request {
        let content = std::fs::read_to_string(path)?;
        return Ok(GenerationRequest::from_json_str(&content)?);
    }

    let kind = args.kind.unwrap_or(settings.generator);
    let mut request = settings.request_for(kind);
    if let Some(count) = args.count {
        request.count = count;
    }

    let password_policy = args.password.map(|password| password_policy(password, args));
    match &mut request.config {
        GeneratorConfig::Email(email) => {
            if let Some(domain) = &args.domain {
                email.domain = DomainSelection::Preset(domain.clone());
            }
            if let Some(domain) = &args.custom_domain {
                email.domain = DomainSelection::Custom(domain.clone());
            }
            if let Some(policy) = password_policy {
                email.password_policy = policy;
            }
        }
        GeneratorConfig::Username(user) => {
            if let Some(pattern) = args.username_pattern {
                user.username_pattern = pattern;
            }
            if let Some(policy) = password_policy {
                user.password_policy = policy;
            }
        }
        GeneratorConfig::CreditCard(card) => {
            if let Some(bin) = &args.bin {
                card.bin = bin.trim().to_string();
            }
            if let Some(card_type) = args.card_type {
                card.card_type = card_type;
            }
        }
        GeneratorConfig::Custom1 | GeneratorConfig::Custom2 => {}
    }

    primex_core::validate_request(&request)?;
    Ok(request)
}

fn password_policy(password: PasswordArg, args: &GenerateArgs) -> PasswordPolicySpec {
    match password {
        PasswordArg::Random => PasswordPolicySpec::Random {
            length: args.password_length.unwrap_or(DEFAULT_PASSWORD_LENGTH),
        },
        PasswordArg::Fixed => PasswordPolicySpec::Fixed {
            value: args.fixed_password.clone().unwrap_or_default(),
        },
        PasswordArg::Numeric => PasswordPolicySpec::Numeric {
            low: args.numeric_min.unwrap_or(DEFAULT_NUMERIC_LOW),
            high: args.numeric_max.unwrap_or(DEFAULT_NUMERIC_HIGH),
        },
        PasswordArg::Patterned => PasswordPolicySpec::Patterned,
        PasswordArg::Dictionary => PasswordPolicySpec::Dictionary,
    }
}
