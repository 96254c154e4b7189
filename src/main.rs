use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use extlint::logging::{console, create_logger};
use extlint::manifest;

#[derive(Parser)]
#[command(name = "extlint")]
#[command(about = "Checks a browser extension source directory for a valid manifest.json")]
struct Cli {
    /// Extension source directory containing manifest.json
    #[arg(default_value = ".")]
    source_dir: PathBuf,

    /// Show debug output, with logger names and level tags
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let stream = console();
    if cli.verbose {
        stream.make_verbose();
    }

    let log = create_logger(file!());

    // Buffer routine log chatter; it is replayed only if the run fails
    stream.start_capturing();
    let result = run(&cli);
    stream.stop_capturing();

    match result {
        Ok(summary) => {
            log.info(summary);
            ExitCode::SUCCESS
        }
        Err(error) => {
            stream.flush_captured_logs();
            log.error(format!("{:#}", error));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let data = manifest::get_validated_manifest(&cli.source_dir)?;
    Ok(format!("{} {} looks valid", data.name(), data.version()))
}
