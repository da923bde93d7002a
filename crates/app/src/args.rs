use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use services::ExportSettings;

pub const ENV_DOWNLOAD_DIR: &str = "PGR_DOWNLOAD_DIR";
pub const ENV_EXPORT_DELAY_MS: &str = "PGR_EXPORT_DELAY_MS";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDelay { raw: String },
    InvalidDownloadDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --export-delay-ms value: {raw}"),
            ArgsError::InvalidDownloadDir { raw } => {
                write!(f, "invalid --download-dir value: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub download_dir: Option<PathBuf>,
    pub export: ExportSettings,
    pub quiet: bool,
}

impl Args {
    /// Directory reports are saved into: the flag or env value, else the
    /// user's downloads folder, else home, else the working directory.
    #[must_use]
    pub fn resolve_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  pgr [--download-dir <path>] [--export-delay-ms <ms>] [--quiet]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --download-dir   the user's Downloads folder");
    eprintln!("  --export-delay-ms 800");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_DOWNLOAD_DIR}, {ENV_EXPORT_DELAY_MS}, RUST_LOG");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_delay(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidDelay { raw })
}

fn parse_download_dir(raw: String) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidDownloadDir { raw });
    }
    Ok(PathBuf::from(raw))
}

/// Parse command-line flags, falling back to `env` for unset values.
///
/// # Errors
///
/// Returns `ArgsError` for unknown flags, missing values, or values that do not parse.
pub fn parse(
    args: impl IntoIterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Command, ArgsError> {
    let mut download_dir = env(ENV_DOWNLOAD_DIR).map(parse_download_dir).transpose()?;
    let mut export = ExportSettings::default();
    if let Some(raw) = env(ENV_EXPORT_DELAY_MS) {
        export.delay = parse_delay(raw)?;
    }
    let mut quiet = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--download-dir" => {
                let value = require_value(&mut args, "--download-dir")?;
                download_dir = Some(parse_download_dir(value)?);
            }
            "--export-delay-ms" => {
                let value = require_value(&mut args, "--export-delay-ms")?;
                export.delay = parse_delay(value)?;
            }
            "--quiet" | "-q" => quiet = true,
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Command::Run(Args {
        download_dir,
        export,
        quiet,
    }))
}
