use std::env;
use std::path::PathBuf;

use listgen_core::{FieldId, FieldMode, FieldSet};
use listgen_generate::output::csv::write_rows_csv_file;
use listgen_generate::{GenerateOptions, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut rows = 10_usize;
    let mut out: Option<PathBuf> = None;
    let mut fields = FieldSet::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rows" => rows = args.next().ok_or("missing --rows value")?.parse()?,
            "--out" => out = args.next().map(PathBuf::from),
            "--name-prefix" => {
                let prefix = args.next().ok_or("missing --name-prefix value")?;
                fields.set_mode(FieldId::Name, FieldMode::StartsWith(prefix));
                fields.revalidate();
            }
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }

    let out = out.unwrap_or_else(|| PathBuf::from("generated_list.csv"));
    let engine = GenerationEngine::new(GenerateOptions::default());
    let batch = engine.generate(&fields, rows)?;
    let bytes = write_rows_csv_file(&out, &batch.rows)?;

    println!("out={} bytes={bytes} seed={}", out.display(), batch.report.seed);
    Ok(())
}
