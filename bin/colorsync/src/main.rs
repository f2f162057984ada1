//! A terminal front end for colorsync. Reads proposals from stdin, one per
//! line, and prints every representation of the color after each change.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colorsync::{parse::parse_hex, ColorSync, DisplaySurface, Displays, Outcome, Rgb8, Space, Update};
use image::{Rgb, RgbImage};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SWATCH_WIDTH: u32 = 830;
const SWATCH_HEIGHT: u32 = 80;

const HELP: &str = "\
commands:
  rgb R G B        0 to 255
  xyz X Y Z        X 0 to 95.0456, Y 0 to 100, Z 0 to 108.8754
  cmyk C M Y K     percentages, 0 to 100
  pick #rrggbb     set the color directly
  show             print the current color
  help             print this message
  quit";

#[derive(Parser, Debug)]
#[command(about = "Keep one color in sync across RGB, XYZ and CMYK")]
struct Args {
    /// Initial color as #rrggbb or #rgb, instead of white.
    #[arg(long)]
    color: Option<String>,
    /// Write a PNG swatch of the final color to this path on exit.
    #[arg(long)]
    swatch: Option<PathBuf>,
    /// Log more (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_displays(displays: &Displays) {
    println!(
        "{}  {}  {}  {}",
        displays.rgb.to_hex(),
        displays.rgb,
        displays.xyz,
        displays.cmyk
    );
}

/// Prints every update to stdout.
struct Terminal;

impl DisplaySurface for Terminal {
    fn refresh(&mut self, update: &Update) {
        print_displays(&update.displays);
        if let Some(warning) = update.warning {
            println!("warning: {warning}");
        }
    }
}

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Propose(Space, Vec<&'a str>),
    Pick(&'a str),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let mut words = line.split_whitespace();
    let command = match words.next()?.to_ascii_lowercase().as_str() {
        "rgb" => Command::Propose(Space::Rgb, words.collect()),
        "xyz" => Command::Propose(Space::Xyz, words.collect()),
        "cmyk" => Command::Propose(Space::Cmyk, words.collect()),
        "pick" => Command::Pick(words.next().unwrap_or_default()),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn write_swatch(path: &Path, rgb: Rgb8) -> Result<()> {
    RgbImage::from_pixel(SWATCH_WIDTH, SWATCH_HEIGHT, Rgb(rgb.to_array()))
        .save(path)
        .with_context(|| format!("could not write swatch to {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    let sync = ColorSync::new(Terminal);
    sync.start();

    if let Some(color) = &args.color {
        sync.set_color(parse_hex(color)?);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line) else {
            println!("unknown command: {}", line.trim());
            continue;
        };

        let outcome = match command {
            Command::Propose(space, fields) => sync.propose_text(space, &fields),
            Command::Pick(hex) => match parse_hex(hex) {
                Ok(rgb) => Ok(sync.set_color(rgb)),
                Err(err) => Err(err.into()),
            },
            Command::Show => {
                print_displays(&sync.current_displays());
                continue;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        };

        match outcome {
            Ok(Outcome::Accepted(_)) => {}
            Ok(Outcome::Ignored(reason)) => debug!(?reason, "proposal ignored"),
            Err(err) => println!("error: {err}"),
        }
    }

    if let Some(path) = &args.swatch {
        let rgb = sync.current_displays().rgb;
        write_swatch(path, rgb)?;
        info!(path = %path.display(), %rgb, "wrote swatch");
    }

    Ok(())
}
