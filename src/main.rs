use clap::Parser;
use imc::cli;
use imc::core::ParseMode;
use imc::core::config::{self, Diagnostics, EnvOverrides, ResolvedConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "imc", about = "Body Mass Index calculator")]
struct Args {
    /// Weight in kilograms ("70" or "70,5"); runs once instead of opening the form
    #[arg(long, requires = "height", allow_hyphen_values = true)]
    weight: Option<String>,

    /// Height in centimeters
    #[arg(long, requires = "weight", allow_hyphen_values = true)]
    height: Option<String>,

    /// How much of each value must be numeric
    #[arg(long, value_enum)]
    parse_mode: Option<ParseMode>,

    /// Print the one-shot result as JSON
    #[arg(long, requires = "weight")]
    json: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Config decides where logs go, so its messages are held until the logger exists
    let mut diagnostics = Diagnostics::default();
    let file_config = config::load_config(&mut diagnostics).unwrap_or_else(|e| {
        eprintln!("Warning: {e}, using defaults");
        diagnostics.warn(format!("{e}, using defaults"));
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &EnvOverrides::from_env(),
        args.parse_mode,
        &mut diagnostics,
    );

    init_logging(&resolved);
    diagnostics.replay();
    log::info!("IMC starting up with parse mode: {}", resolved.parse_mode.label());

    match (args.weight, args.height) {
        (Some(weight), Some(height)) => {
            let outcome = cli::run_once(&weight, &height, resolved.parse_mode, args.json)?;
            print!("{}", outcome.stdout);
            eprint!("{}", outcome.stderr);
            if outcome.exit_code != 0 {
                std::process::exit(outcome.exit_code);
            }
            Ok(())
        }
        _ => imc::tui::run(&resolved),
    }
}

/// Initialize file logger - the terminal belongs to the form while it runs
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
