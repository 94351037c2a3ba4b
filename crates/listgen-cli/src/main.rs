mod atomic;
mod edits;
mod logging;
mod preview;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use listgen_core::{Error as CoreError, FieldId, FieldSet, ValidationReport};
use listgen_generate::output::csv::rows_to_csv;
use listgen_generate::{Batch, GenerateOptions, GenerationEngine, GenerationError};
use serde::Serialize;
use thiserror::Error;

use atomic::write_bytes_atomic;
use edits::{Edits, FieldEdit, parse_edit, parse_field};
use logging::init_logging;
use preview::{PREVIEW_ROWS, render_fields, render_preview};
use settings::{DEFAULT_ROWS, ListConfig, MAX_ROWS, check_rows};

#[derive(Debug, Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Generation(#[from] GenerationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("validation failed: {0}")]
    Invalid(ValidationReport),
    #[error("logging error: {0}")]
    Logging(String),
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "listgen", version, about = "Synthetic contact list generator")]
struct Cli {
    /// Append JSON log lines to this file.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate rows and export them.
    Generate(GenerateArgs),
    /// Validate the field configuration without generating.
    Validate(FieldArgs),
    /// List fields with their labels and modes.
    Fields(FieldArgs),
    /// Print the JSON schema of the configuration file.
    Schema,
}

#[derive(Args, Debug)]
struct FieldArgs {
    /// TOML configuration file with rows, seed and field modes.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Generate a field randomly.
    #[arg(long = "random", value_name = "FIELD", value_parser = parse_field)]
    random: Vec<FieldId>,
    /// Fix a field to a literal value.
    #[arg(long = "fixed", value_name = "FIELD=VALUE", value_parser = parse_edit)]
    fixed: Vec<FieldEdit>,
    /// Prefix a field's random value (name only; other fields use it as a literal).
    #[arg(long = "starts-with", value_name = "FIELD=PREFIX", value_parser = parse_edit)]
    starts_with: Vec<FieldEdit>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    fields: FieldArgs,
    /// Number of rows (1-1000).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_ROWS as i64))]
    rows: Option<u32>,
    /// Seed for a reproducible batch.
    #[arg(long)]
    seed: Option<u64>,
    /// Give up after this many draws for one phone number.
    #[arg(long, value_name = "N")]
    max_phone_attempts: Option<u32>,
    /// Output file.
    #[arg(long, default_value = "generated_list.csv")]
    out: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Skip the preview table on stdout.
    #[arg(long, default_value_t = false)]
    no_preview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

/// JSON export envelope.
#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    generated_at: String,
    report: &'a listgen_generate::GenerationReport,
    rows: &'a [listgen_generate::GeneratedRow],
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_file.as_deref()) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Generate(args) => run_generate(args),
        Command::Validate(args) => run_validate(args),
        Command::Fields(args) => run_fields(args),
        Command::Schema => run_schema(),
    }
}

fn run_generate(args: GenerateArgs) -> CliResult<()> {
    let GenerateArgs {
        fields: field_args,
        rows,
        seed,
        max_phone_attempts,
        out,
        format,
        no_preview,
    } = args;

    let (config, fields) = load_fields(&field_args)?;
    let rows = check_rows(rows.or(config.rows).unwrap_or(DEFAULT_ROWS))?;
    let options = GenerateOptions {
        seed: seed.or(config.seed),
        max_phone_attempts: max_phone_attempts.or(config.max_phone_attempts),
    };

    tracing::info!(event = "generate_requested", rows, out = %out.display());

    let engine = GenerationEngine::new(options);
    let batch = match engine.generate(&fields, rows as usize) {
        Ok(batch) => batch,
        Err(GenerationError::Rejected(report)) => {
            print!("{}", render_fields(&fields.validated()));
            return Err(CliError::Invalid(report));
        }
        Err(err) => return Err(err.into()),
    };

    let bytes = export(&batch, format)?;
    write_bytes_atomic(&out, &bytes)?;
    tracing::info!(
        event = "export_written",
        path = %out.display(),
        bytes = bytes.len() as u64,
        format = ?format
    );

    if !no_preview {
        print!("{}", render_preview(&batch.rows, PREVIEW_ROWS));
    }
    println!(
        "wrote {} rows to {} (seed {})",
        batch.rows.len(),
        out.display(),
        batch.report.seed
    );
    Ok(())
}

fn run_validate(args: FieldArgs) -> CliResult<()> {
    let (_, fields) = load_fields(&args)?;
    print!("{}", render_fields(&fields));
    let report = fields.report();
    if report.is_ok() {
        Ok(())
    } else {
        Err(CliError::Invalid(report))
    }
}

fn run_fields(args: FieldArgs) -> CliResult<()> {
    let (_, fields) = load_fields(&args)?;
    print!("{}", render_fields(&fields));
    println!();
    print!("{}", toml::to_string_pretty(&ListConfig::from_fields(&fields))?);
    Ok(())
}

fn run_schema() -> CliResult<()> {
    let schema = schemars::schema_for!(ListConfig);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

/// Build the field set from the config file and command-line edits.
fn load_fields(args: &FieldArgs) -> CliResult<(ListConfig, FieldSet)> {
    let config = match &args.config {
        Some(path) => ListConfig::load(path)?,
        None => ListConfig::default(),
    };

    let mut fields = FieldSet::new();
    config.apply(&mut fields)?;
    Edits {
        random: args.random.clone(),
        fixed: args.fixed.clone(),
        starts_with: args.starts_with.clone(),
    }
    .apply(&mut fields);

    Ok((config, fields))
}

fn export(batch: &Batch, format: OutputFormat) -> CliResult<Vec<u8>> {
    match format {
        OutputFormat::Csv => Ok(rows_to_csv(&batch.rows)?),
        OutputFormat::Json => {
            let export = JsonExport {
                generated_at: chrono::Utc::now().to_rfc3339(),
                report: &batch.report,
                rows: &batch.rows,
            };
            Ok(serde_json::to_vec_pretty(&export)?)
        }
    }
}
