mod report;

use clap::Parser;
use eyre::{bail, WrapErr};
use otp_common::RegisterStore;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use crate::report::{RegionTable, Report};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let args = CmdArgs::parse();

    let filter = if args.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .map_event_format(|f| f.without_time())
        .init();

    let store = load(&args)?;
    let report = Report::new(&store).wrap_err("failed to decode OTP dump")?;

    for warning in report.warnings() {
        tracing::warn!("{warning}");
    }
    print_lines(report.lines());
    if args.all_regions {
        println!();
        print_lines(RegionTable::new(&store).lines());
    }

    Ok(())
}

fn load(args: &CmdArgs) -> eyre::Result<RegisterStore> {
    match &args.file {
        Some(path) => {
            if !path.is_file() {
                bail!("Unable to open file {}", path.display());
            }
            let file =
                File::open(path).wrap_err_with(|| format!("Unable to open file {}", path.display()))?;
            tracing::debug!("reading OTP dump from {}", path.display());
            RegisterStore::from_reader(BufReader::new(file))
                .wrap_err_with(|| format!("failed to read {}", path.display()))
        }
        None => {
            tracing::debug!("reading OTP dump from standard input");
            RegisterStore::from_reader(std::io::stdin().lock())
                .wrap_err("failed to read standard input")
        }
    }
}

fn print_lines(lines: &[(String, String)]) {
    for (label, value) in lines {
        let label = format!("{label:>width$}", width = report::LABEL_WIDTH);
        println!("{} : {value}", console::style(label).bold());
    }
}

#[derive(clap::Parser, Debug, Clone)]
#[command(version, about = "Decode a Raspberry Pi OTP dump", long_about = None)]
struct CmdArgs {
    /// Output of `vcgencmd otp_dump`; read from standard input if not specified
    pub file: Option<PathBuf>,

    /// Silence warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Also print every loaded region in decimal, hexadecimal, octal and binary
    #[arg(short, long)]
    pub all_regions: bool,
}
