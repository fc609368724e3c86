//! Toolbelt CLI — every panel's transformation as a one-shot command.
//!
//! Commands:
//! - `case` — upper/lower/title/reverse a string
//! - `stats` — character/word/line counts
//! - `json fmt|min|analyze` — format, minify, or analyze JSON
//! - `encode` / `decode` — base64 or URL percent encoding
//! - `color` — hex → RGB → HSL
//! - `password` — generate from selected character classes
//! - `qr` — render a QR code as unicode blocks
//! - `calc` — evaluate an arithmetic expression
//! - `convert` — length unit conversion
//!
//! Text arguments are optional; omitted ones are read from stdin.

use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use toolbelt_core::color::{Hsl, Rgb};
use toolbelt_core::password::{self, PasswordSpec};
use toolbelt_core::stats::TextStats;
use toolbelt_core::text::{self, CaseAction};
use toolbelt_core::units::{self, LengthUnit};
use toolbelt_core::{calc, encode, json, qr};

#[derive(Parser)]
#[command(name = "toolbelt", about = "Toolbelt CLI — micro-utilities for text, data, and numbers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseArg {
    Upper,
    Lower,
    Title,
    Reverse,
}

impl From<CaseArg> for CaseAction {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Upper => CaseAction::Upper,
            CaseArg::Lower => CaseAction::Lower,
            CaseArg::Title => CaseAction::Title,
            CaseArg::Reverse => CaseAction::Reverse,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Codec {
    Base64,
    Url,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a case transform.
    Case {
        #[arg(value_enum)]
        action: CaseArg,
        /// Text to transform; stdin if omitted.
        text: Option<String>,
    },
    /// Character, word, and line counts.
    Stats {
        text: Option<String>,
    },
    /// JSON formatting and analysis.
    Json {
        #[command(subcommand)]
        command: JsonCommands,
    },
    /// Encode text as base64 or URL percent encoding.
    Encode {
        #[arg(value_enum)]
        codec: Codec,
        text: Option<String>,
    },
    /// Decode base64 or URL percent encoding.
    Decode {
        #[arg(value_enum)]
        codec: Codec,
        text: Option<String>,
    },
    /// Convert a #RRGGBB hex color to RGB and HSL.
    Color {
        hex: String,
    },
    /// Generate a password.
    Password {
        #[arg(long, default_value_t = 16)]
        length: usize,
        /// Drop A-Z from the pool.
        #[arg(long)]
        no_uppercase: bool,
        /// Drop a-z from the pool.
        #[arg(long)]
        no_lowercase: bool,
        /// Drop 0-9 from the pool.
        #[arg(long)]
        no_digits: bool,
        /// Drop punctuation from the pool.
        #[arg(long)]
        no_symbols: bool,
    },
    /// Render a QR code as unicode blocks.
    Qr {
        text: Option<String>,
        /// Skip the light margin around the symbol.
        #[arg(long)]
        no_quiet_zone: bool,
    },
    /// Evaluate an arithmetic expression.
    Calc {
        expression: String,
    },
    /// Convert a length between units (m, cm, km, ft, in).
    Convert {
        value: f64,
        from: LengthUnit,
        to: LengthUnit,
    },
}

#[derive(Subcommand)]
enum JsonCommands {
    /// Pretty-print with 2-space indentation.
    Fmt { text: Option<String> },
    /// Minify to a single line.
    Min { text: Option<String> },
    /// Report top-level shape and value-type counts.
    Analyze { text: Option<String> },
}

/// Positional text, or stdin when omitted.
fn read_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            // Shells append a trailing newline; it is never part of the input.
            if buf.ends_with('\n') {
                buf.pop();
            }
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Case { action, text } => {
            let input = read_text(text)?;
            println!("{}", text::transform(&input, action.into()));
        }
        Commands::Stats { text } => {
            let input = read_text(text)?;
            let stats = TextStats::of(&input);
            println!("chars: {}", stats.chars);
            println!("words: {}", stats.words);
            println!("lines: {}", stats.lines);
        }
        Commands::Json { command } => match command {
            JsonCommands::Fmt { text } => {
                let input = read_text(text)?;
                println!("{}", json::pretty(&input)?);
            }
            JsonCommands::Min { text } => {
                let input = read_text(text)?;
                println!("{}", json::minify(&input)?);
            }
            JsonCommands::Analyze { text } => {
                let input = read_text(text)?;
                for line in json::analyze(&input)?.lines() {
                    println!("{line}");
                }
            }
        },
        Commands::Encode { codec, text } => {
            let input = read_text(text)?;
            let out = match codec {
                Codec::Base64 => encode::base64_encode(&input),
                Codec::Url => encode::url_encode(&input),
            };
            println!("{out}");
        }
        Commands::Decode { codec, text } => {
            let input = read_text(text)?;
            let out = match codec {
                Codec::Base64 => encode::base64_decode(&input)?,
                Codec::Url => encode::url_decode(&input)?,
            };
            println!("{out}");
        }
        Commands::Color { hex } => {
            let rgb = Rgb::from_hex(&hex)?;
            println!("{}", rgb.to_hex());
            println!("{rgb}");
            println!("{}", Hsl::from(rgb));
        }
        Commands::Password {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
        } => {
            let spec = PasswordSpec {
                length,
                uppercase: !no_uppercase,
                lowercase: !no_lowercase,
                digits: !no_digits,
                symbols: !no_symbols,
            };
            println!("{}", password::generate(&spec, &mut rand::thread_rng())?);
        }
        Commands::Qr { text, no_quiet_zone } => {
            let input = read_text(text)?;
            println!("{}", qr::render(&input, !no_quiet_zone)?);
        }
        Commands::Calc { expression } => {
            println!("{}", calc::eval(&expression)?);
        }
        Commands::Convert { value, from, to } => {
            println!("{}", units::format_conversion(value, from, to));
        }
    }

    Ok(())
}
