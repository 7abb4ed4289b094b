//! Tinct CLI — colorize colors, derive deltas, and verify against reference
//! data from the command line.
//!
//! Logging is controlled by `TINCT_LOG` (a `tracing` filter directive).

mod cases;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tinct_core::{ColorizeMode, ColorizeParams, Hls, Rgba, colorize, derive_deltas};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(version, about = "Host-compatible material colorize transform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply HLS deltas to a color
    Colorize {
        /// Base color as r,g,b[,a] or #rrggbb[aa]
        #[arg(short, long, value_name = "COLOR")]
        color: Rgba,

        /// Hue delta in degrees (absolute hue with --clamp)
        #[arg(long, value_name = "DEGREES", default_value_t = 0.0, allow_hyphen_values = true)]
        hue: f64,

        /// Lightness delta
        #[arg(long, value_name = "DELTA", default_value_t = 0.0, allow_hyphen_values = true)]
        lightness: f64,

        /// Saturation delta (-1 forces monochrome)
        #[arg(long, value_name = "DELTA", default_value_t = 0.0, allow_hyphen_values = true)]
        saturation: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Derive the deltas that turn one color into another
    Deltas {
        /// Base color (e.g. a texture's average color)
        #[arg(short, long, value_name = "COLOR")]
        from: Rgba,

        /// Target color
        #[arg(short, long, value_name = "COLOR")]
        to: Rgba,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check the transform against reference cases
    Verify {
        /// JSON case file (defaults to TINCT_CASES, then the built-in cases)
        #[arg(long, value_name = "FILE")]
        cases: Option<PathBuf>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Replace the hue instead of shifting it
    #[arg(long)]
    clamp: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl OutputArgs {
    fn mode(&self) -> ColorizeMode {
        ColorizeMode::from(!self.clamp)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CliConfig::from_env();
    init_logging(&config);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &CliConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|err| {
        eprintln!("ignoring TINCT_LOG={:?}: {err}", config.log_filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, config: &CliConfig) -> Result<(), CliError> {
    match command {
        Commands::Colorize {
            color,
            hue,
            lightness,
            saturation,
            output,
        } => {
            let delta = Hls::new(hue, lightness, saturation);
            let mode = output.mode();
            let result = colorize(color, delta, mode.is_shift());
            tracing::debug!(%color, ?delta, mode = mode.label(), %result, "colorized");
            if output.json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{result}");
            }
        }
        Commands::Deltas { from, to, output } => {
            let mode = output.mode();
            let deltas = derive_deltas(from, to, mode.is_shift());
            tracing::debug!(%from, %to, mode = mode.label(), ?deltas, "derived deltas");
            if output.json {
                let params = ColorizeParams::new(deltas, mode);
                println!("{}", serde_json::to_string(&params)?);
            } else {
                println!("h: {}\nl: {}\ns: {}", deltas.h, deltas.l, deltas.s);
            }
        }
        Commands::Verify { cases: cases_file } => {
            let path = cases_file.or_else(|| config.cases_path.clone());
            let cases = match &path {
                Some(path) => {
                    tracing::info!(path = %path.display(), "loading reference cases");
                    cases::load_cases(path)?
                }
                None => cases::builtin_cases(),
            };
            cases::verify(&cases)?;
            tracing::info!(count = cases.len(), "all reference cases match");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_colorize_with_negative_deltas() {
        let cli = Cli::try_parse_from([
            "tinct",
            "colorize",
            "--color",
            "115,137,98,128",
            "--hue",
            "92.58741048890613",
            "--lightness",
            "0.13725490868091583",
            "--saturation",
            "-0.11229892646129502",
        ])
        .unwrap();
        let Commands::Colorize {
            color,
            saturation,
            output,
            ..
        } = cli.command
        else {
            panic!("expected colorize");
        };
        assert_eq!(color, Rgba::new(115, 137, 98, 128));
        assert!((saturation + 0.11229892646129502).abs() < 1e-15);
        assert_eq!(output.mode(), ColorizeMode::Shift);
    }

    #[test]
    fn test_parse_deltas_clamp() {
        let cli = Cli::try_parse_from([
            "tinct", "deltas", "--from", "#698962", "--to", "147,154,158", "--clamp",
        ])
        .unwrap();
        let Commands::Deltas { from, output, .. } = cli.command else {
            panic!("expected deltas");
        };
        assert_eq!(from, Rgba::rgb(105, 137, 98));
        assert_eq!(output.mode(), ColorizeMode::Clamp);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        assert!(Cli::try_parse_from(["tinct", "colorize", "--color", "1,2"]).is_err());
    }
}
