use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use stylx_core::{DumpConfig, OutputFormat, format_items, format_tables, select_inputs};
use tracing::info;

mod batch;
mod logging;

use batch::run_batch;

#[derive(Debug, Parser)]
#[command(name = "dump-stylx", version)]
#[command(about = "Dump the items of stylx style libraries as JSON")]
struct Cli {
    /// Style files to read. Arguments without a style extension are ignored.
    paths: Vec<String>,
    /// YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format (default: json, or the config file's format).
    #[arg(long)]
    format: Option<OutputFormat>,
    /// List each file's tables and views instead of its items.
    #[arg(long)]
    tables: bool,
    /// Log debug diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = match &cli.config {
        Some(path) => DumpConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => DumpConfig::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }

    let cwd = std::env::current_dir()
        .map_err(|err| format!("Failed to resolve working directory: {err}"))?;
    let paths = select_inputs(&cli.paths, &config.extensions, &cwd);
    info!(files = ?paths, "stylx files");

    let rendered = if cli.tables {
        let tables = run_batch(&paths, &cwd, |db| db.list_tables_and_views());
        format_tables(&tables, config.format)?
    } else {
        let items = run_batch(&paths, &cwd, |db| db.read_items());
        format_items(&items, config.format)?
    };

    write_stdout(&rendered, config.format)
}

fn write_stdout(rendered: &str, format: OutputFormat) -> Result<(), String> {
    let mut stdout = std::io::stdout().lock();
    let result = if format == OutputFormat::Json {
        writeln!(stdout, "{rendered}")
    } else {
        write!(stdout, "{rendered}")
    };
    result
        .and_then(|()| stdout.flush())
        .map_err(|err| format!("Failed to write output: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "dump-stylx",
            "a.stylx",
            "b.txt",
            "--format",
            "yaml",
            "--tables",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.paths, ["a.stylx", "b.txt"]);
        assert_eq!(cli.format, Some(OutputFormat::Yaml));
        assert!(cli.tables);
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["dump-stylx"]).unwrap();
        assert!(cli.paths.is_empty());
        assert!(!cli.tables);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["dump-stylx", "--format", "xml"]).is_err());
    }
}
