use clap::Parser;
use digitwise::application::engine::CalculatorEngine;
use digitwise::domain::policy::{CalculatorConfig, OrderingPolicy, SignPolicy};
use digitwise::domain::ports::AnswerSinkBox;
use digitwise::interfaces::text::answer_writer::{AnswerWriter, OutputFormat};
use digitwise::interfaces::text::equation_reader::EquationReader;
use log::info;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file with one `<left> <operator> <right>` equation per line.
    /// Reads stdin when absent.
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Echo each equation above its answer
    #[arg(long)]
    echo: bool,

    /// Which leading characters mark an operand as negative
    #[arg(long, value_enum, default_value_t = SignPolicy::Strict)]
    sign: SignPolicy,

    /// How operands are ordered before subtracting
    #[arg(long, value_enum, default_value_t = OrderingPolicy::Magnitude)]
    ordering: OrderingPolicy,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = CalculatorConfig {
        sign: cli.sign,
        ordering: cli.ordering,
    };
    let sink: AnswerSinkBox = Box::new(AnswerWriter::new(
        BufWriter::new(io::stdout()),
        cli.format,
        cli.echo,
    ));
    let engine = CalculatorEngine::new(config, sink);

    let source: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };
    let reader = EquationReader::new(source);

    let mut processed = 0usize;
    let mut failed = 0usize;
    for record_result in reader.equations() {
        let record = match record_result {
            Ok(record) => record,
            Err(e) if e.is_fatal() => return Err(e).into_diagnostic(),
            Err(e) => {
                match e.line() {
                    Some(line) => eprintln!("Error reading equation on line {}: {}", line, e),
                    None => eprintln!("Error reading equation: {}", e),
                }
                failed += 1;
                continue;
            }
        };

        let line = record.line;
        match engine.process_record(record).await {
            Ok(_) => processed += 1,
            Err(e) if e.is_fatal() => return Err(e).into_diagnostic(),
            Err(e) => {
                eprintln!("Error processing equation on line {}: {}", line, e);
                failed += 1;
            }
        }
    }

    engine.finish().await.into_diagnostic()?;
    info!("Processed {} equations, {} failed", processed, failed);

    Ok(())
}
