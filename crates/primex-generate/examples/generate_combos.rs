use std::env;

use primex_core::GenerationRequest;
use primex_generate::output::export;
use primex_generate::{ExportFormat, GenerationSession};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut request_path = None;
    let mut seed: Option<u64> = None;
    let mut format = ExportFormat::Text;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--request" => request_path = args.next(),
            "--seed" => seed = args.next().map(|value| value.parse()).transpose()?,
            "--format" => format = args.next().ok_or("missing --format value")?.parse()?,
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }

    let request_path = request_path.ok_or("missing --request path")?;
    let request = GenerationRequest::from_json_str(&std::fs::read_to_string(&request_path)?)?;

    let mut session = match seed {
        Some(seed) => GenerationSession::seeded(seed),
        None => GenerationSession::from_entropy(),
    };
    let result = session.run(request)?;

    println!("{}", export(&result, format, chrono::Utc::now())?);
    Ok(())
}
