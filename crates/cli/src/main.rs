#![deny(unsafe_code)]
//! CLI binary for the hsl-contrast engine.
//!
//! Subcommands:
//! - `parse <color>` — normalize an `hsl()`/`hsla()` string
//! - `check <background> <foreground>` — contrast ratio and WCAG verdict of
//!   two colors or palette shades
//! - `swatches` — every shade of a family against its light and dark text
//! - `matrix` — text shades of one family on background shades of the other
//! - `levels` — print the WCAG threshold table

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use hsl_contrast_core::{
    check_contrast, family_swatches, hsl_to_srgb, luminance_of, parse_color, ContrastMatrix,
    ContrastPolicy, ContrastVerdict, FamilyKind, Pairing, PaletteConfig, WcagLevel,
};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "hsl-contrast", about = "HSL color contrast checker")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse and normalize an hsl()/hsla() color.
    Parse {
        /// Color string, e.g. "hsl(210, 50%, 40%)".
        color: String,
    },
    /// Compute the contrast ratio of a foreground over a background.
    ///
    /// Either color may be an hsl() string or a palette shade such as `neutral:30`.
    Check {
        /// Background color.
        background: String,

        /// Foreground (text) color.
        foreground: String,

        /// Palette JSON file for shade references; the built-in palette is used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// WCAG level (AA or AAA).
        #[arg(short, long, default_value = "AA")]
        level: String,

        /// Judge against the large-text threshold.
        #[arg(long)]
        large: bool,
    },
    /// Show every shade of a family against its light and dark text shades.
    Swatches {
        /// Palette JSON file; the built-in palette is used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Family to show (neutral or accent).
        #[arg(short, long, default_value = "neutral")]
        family: String,
    },
    /// Cross the text shades of one family with the background shades of the other.
    Matrix {
        /// Palette JSON file; the built-in palette is used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// accent-on-neutral or neutral-on-accent.
        #[arg(short, long, default_value = "accent-on-neutral")]
        pairing: String,

        /// WCAG level (AA or AAA).
        #[arg(short, long, default_value = "AA")]
        level: String,

        /// Judge against the large-text threshold.
        #[arg(long)]
        large: bool,

        /// List the color pairs without computing contrast.
        #[arg(long, conflicts_with_all = ["level", "large"])]
        plain: bool,
    },
    /// Print the WCAG contrast threshold table.
    Levels,
}

fn load_config(path: Option<&Path>) -> Result<PaletteConfig, CliError> {
    match path {
        Some(path) => Ok(PaletteConfig::load(path)?),
        None => Ok(PaletteConfig::default()),
    }
}

/// Resolves `family:key` to that shade's hsl() string. Anything else is
/// returned as-is for the engine to parse.
fn resolve_color(arg: &str, config: &PaletteConfig) -> Result<String, CliError> {
    let shade = arg.split_once(':').and_then(|(family, key)| {
        let kind = family.parse::<FamilyKind>().ok()?;
        let key = key.trim().parse::<u16>().ok()?;
        Some((kind, key))
    });
    match shade {
        Some((kind, key)) => Ok(config.color(kind, key)?),
        None => Ok(arg.to_string()),
    }
}

fn policy_label(policy: ContrastPolicy) -> String {
    let size = if policy.large_text {
        "large text"
    } else {
        "normal text"
    };
    format!("{}, {size}", policy.level)
}

fn verdict_mark(v: &ContrastVerdict) -> &'static str {
    if v.accessible {
        "PASS"
    } else {
        "FAIL"
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Parse { color } => {
            let hsl = parse_color(&color)?;
            let hex = hsl_to_srgb(hsl).to_hex();
            let luminance = luminance_of(hsl);
            if cli.json {
                let info = serde_json::json!({
                    "color": hsl,
                    "hue": hsl.hue,
                    "saturation": hsl.saturation,
                    "lightness": hsl.lightness,
                    "alpha": hsl.alpha,
                    "hex": hex,
                    "luminance": luminance,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("color:      {hsl}");
                println!("hue:        {}", hsl.hue);
                println!("saturation: {}", hsl.saturation);
                println!("lightness:  {}", hsl.lightness);
                if let Some(alpha) = hsl.alpha {
                    println!("alpha:      {alpha}");
                }
                println!("hex:        {hex}");
                println!("luminance:  {luminance:.4}");
            }
        }
        Command::Check {
            background,
            foreground,
            config,
            level,
            large,
        } => {
            let config = load_config(config.as_deref())?;
            let background = resolve_color(&background, &config)?;
            let foreground = resolve_color(&foreground, &config)?;
            let policy = ContrastPolicy::new(level.parse()?, large);
            let verdict = check_contrast(&background, &foreground, policy)?;
            if cli.json {
                let info = serde_json::json!({
                    "background": background,
                    "foreground": foreground,
                    "policy": policy,
                    "threshold": policy.threshold(),
                    "ratio": verdict.ratio,
                    "accessible": verdict.accessible,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{:.2}:1 {} ({}, needs {:.1}:1)",
                    verdict.ratio,
                    verdict_mark(&verdict),
                    policy_label(policy),
                    policy.threshold()
                );
            }
        }
        Command::Swatches { config, family } => {
            let config = load_config(config.as_deref())?;
            let kind: FamilyKind = family.parse()?;
            let swatches = family_swatches(&config, kind)?;

            if swatches.iter().any(|s| s.contrast.is_none()) {
                eprintln!(
                    "warning: {kind} family lacks text shade {} or {}; showing swatches without contrast",
                    config.light_text, config.dark_text
                );
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&swatches)?);
            } else {
                for s in &swatches {
                    match &s.contrast {
                        Some(c) => println!(
                            "{:>5}  {:<24} light {:>5.2} {}  dark {:>5.2} {}",
                            s.key,
                            s.color,
                            c.light.ratio,
                            verdict_mark(&c.light),
                            c.dark.ratio,
                            verdict_mark(&c.dark)
                        ),
                        None => println!("{:>5}  {}", s.key, s.color),
                    }
                }
            }
        }
        Command::Matrix {
            config,
            pairing,
            level,
            large,
            plain,
        } => {
            let config = load_config(config.as_deref())?;
            let pairing: Pairing = pairing.parse()?;
            let policy = ContrastPolicy::new(level.parse()?, large);
            let matrix = if plain {
                ContrastMatrix::plain(&config, pairing)
            } else {
                ContrastMatrix::build(&config, pairing, policy)?
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&matrix)?);
            } else if plain {
                for row in &matrix.rows {
                    println!("{:>5}  {}", row.text_key, row.text);
                    for c in &row.cells {
                        println!("       on {:>5}  {}", c.background_key, c.background);
                    }
                }
            } else {
                let header: String = matrix
                    .rows
                    .first()
                    .map(|r| {
                        r.cells
                            .iter()
                            .map(|c| format!("{:>7}", c.background_key))
                            .collect::<String>()
                    })
                    .unwrap_or_default();
                println!("{:>5} {header}", "");
                for row in &matrix.rows {
                    let cells: String = row
                        .cells
                        .iter()
                        .map(|c| match c.verdict {
                            Some(v) => {
                                let mark = if v.accessible { '*' } else { ' ' };
                                format!("{:>6.2}{mark}", v.ratio)
                            }
                            None => format!("{:>7}", "-"),
                        })
                        .collect();
                    println!("{:>5} {cells}", row.text_key);
                }
                eprintln!(
                    "{pairing}: {}/{} pairs pass ({}, needs {:.1}:1)",
                    matrix.pass_count(),
                    matrix.cell_count(),
                    policy_label(policy),
                    policy.threshold()
                );
            }
        }
        Command::Levels => {
            let table = ContrastPolicy::all();
            if cli.json {
                let rows: Vec<_> = table
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "level": p.level,
                            "large_text": p.large_text,
                            "threshold": p.threshold(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for level in WcagLevel::ALL {
                    let normal = ContrastPolicy::new(level, false).threshold();
                    let large = ContrastPolicy::new(level, true).threshold();
                    println!("{level:<4} normal text {normal:.1}:1  large text {large:.1}:1");
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
