use std::path::PathBuf;
use std::process::ExitCode;

use bibhead::{
    Config, Summary, DEFAULT_INPUT, DEFAULT_LIMIT, DEFAULT_OUTPUT, INPUT_ENV, LIMIT_ENV, OUTPUT_ENV,
};
use clap::Parser as CLIParser;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Settings {
    /// Filepath to the .bib file to read entries from
    #[clap(short, long, env = INPUT_ENV, default_value = DEFAULT_INPUT, parse(from_os_str))]
    input: PathBuf,

    /// Filepath to write the selected entries to (overwritten)
    #[clap(short, long, env = OUTPUT_ENV, default_value = DEFAULT_OUTPUT, parse(from_os_str))]
    output: PathBuf,

    /// Number of entries to keep
    #[clap(short = 'n', long, env = LIMIT_ENV, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Print the summary as JSON
    #[cfg(feature = "json")]
    #[clap(long)]
    json: bool,
}

impl Settings {
    fn config(&self) -> Config {
        Config::new(&self.input, &self.output, self.limit)
    }
}

fn print_human_readable(summary: &Summary) {
    println!(
        "extracted {} of {} entries",
        summary.selected, summary.total_found
    );
    println!("written to {}", summary.output.display());
}

#[cfg(feature = "json")]
fn print_json(summary: &Summary) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(summary)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::parse();

    match bibhead::run(&settings.config()) {
        Ok(summary) => {
            #[cfg(feature = "json")]
            {
                if settings.json {
                    if let Err(e) = print_json(&summary) {
                        eprintln!("error: cannot serialize summary: {}", e);
                        return ExitCode::FAILURE;
                    }
                    return ExitCode::SUCCESS;
                }
            }
            print_human_readable(&summary);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_fatal() => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error while processing: {}", e);
            println!("extracted 0 entries");
            ExitCode::SUCCESS
        }
    }
}
