//! `colview`: format delimited records into fixed-width terminal columns.
//!
//! ```text
//! $ printf 'report.txt\t12K\n' | colview --columns '-{1}...,6{2}' --width 16
//! report.txt   12K
//! ```

mod app;

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use colview::LayoutConfig;
use tracing_subscriber::EnvFilter;

use app::Formatter;

const DEFAULT_WIDTH: usize = 80;

/// Format delimited records into fixed-width columns
#[derive(Parser, Debug)]
#[command(name = "colview")]
#[command(version)]
#[command(about = "Format delimited records into fixed-width terminal columns")]
struct Cli {
    /// Column format, e.g. '-{1}...,8{2}' or '-{name},6{size}..' with --header
    #[arg(short, long, conflicts_with = "config", allow_hyphen_values = true)]
    columns: Option<String>,

    /// Layout file (.yaml, .yml or .json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Line width in cells (defaults to the terminal width)
    #[arg(short, long)]
    width: Option<usize>,

    /// Field delimiter
    #[arg(short, long, default_value_t = '\t')]
    delimiter: char,

    /// Blank cells between columns (overrides the layout)
    #[arg(long)]
    gap: Option<usize>,

    /// Ellipsis marker (overrides the layout)
    #[arg(long)]
    ellipsis: Option<String>,

    /// Treat the first record as field names
    #[arg(long)]
    header: bool,
}

impl Cli {
    fn layout(&self) -> anyhow::Result<LayoutConfig> {
        let mut layout = match (&self.columns, &self.config) {
            (Some(format), _) => LayoutConfig::parse_format(format)?,
            (None, Some(path)) => LayoutConfig::from_file(path)
                .with_context(|| format!("loading layout from {}", path.display()))?,
            (None, None) => bail!("one of --columns or --config is required"),
        };
        if let Some(gap) = self.gap {
            layout.gap = gap;
        }
        if let Some(ellipsis) = &self.ellipsis {
            layout.ellipsis = ellipsis.clone();
        }
        Ok(layout)
    }

    fn line_width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            terminal_size::terminal_size()
                .map(|(terminal_size::Width(w), _)| w as usize)
                .unwrap_or(DEFAULT_WIDTH)
        })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("COLVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let formatter = Formatter::new(cli.layout()?, cli.line_width(), cli.delimiter, cli.header);
    let count = formatter.run(io::stdin().lock(), io::stdout().lock())?;
    tracing::info!(records = count, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_format_and_overrides() {
        let cli = Cli::try_parse_from([
            "colview",
            "--columns",
            "-{1}...,6{2}",
            "--width",
            "30",
            "--gap",
            "1",
            "--ellipsis",
            "…",
        ])
        .unwrap();
        assert_eq!(cli.line_width(), 30);
        let layout = cli.layout().unwrap();
        assert_eq!(layout.columns.len(), 2);
        assert_eq!(layout.gap, 1);
        assert_eq!(layout.ellipsis, "…");
    }

    #[test]
    fn columns_and_config_conflict() {
        let res = Cli::try_parse_from(["colview", "--columns", "{1}", "--config", "x.yaml"]);
        assert!(res.is_err());
    }

    #[test]
    fn layout_is_required() {
        let cli = Cli::try_parse_from(["colview"]).unwrap();
        assert!(cli.layout().is_err());
    }

    #[test]
    fn custom_delimiter() {
        let cli = Cli::try_parse_from(["colview", "-c", "{1}", "-d", ","]).unwrap();
        assert_eq!(cli.delimiter, ',');
    }
}
