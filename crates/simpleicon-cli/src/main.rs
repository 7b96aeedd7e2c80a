//! simpleicon - Display SimpleIcon text images
//!
//! A command-line tool for decoding SimpleIcon files and drawing them in the
//! terminal.

use clap::{Args, Parser, Subcommand};
use simpleicon::{load, load_from_reader, write_to, Icon, IconError, RenderOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "simpleicon")]
#[command(version)]
#[command(about = "Decode and display SimpleIcon text images", long_about = None)]
struct Cli {
    /// Print progress for every input on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw icons in the terminal
    Show {
        /// Input icon files (use - for stdin)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        glyphs: GlyphArgs,

        /// Skip the name, size and version lines
        #[arg(long)]
        no_header: bool,
    },

    /// Print name, size and version of icons
    Info {
        /// Input icon files (use - for stdin)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct GlyphArgs {
    /// Character drawn for a set pixel
    #[arg(long, default_value_t = 'x')]
    set_glyph: char,

    /// Character drawn for an unset pixel
    #[arg(long, default_value_t = ' ')]
    unset_glyph: char,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    let mut failures = 0usize;

    match cli.command {
        Commands::Show {
            inputs,
            glyphs,
            no_header,
        } => {
            let opts = RenderOptions {
                set_glyph: glyphs.set_glyph,
                unset_glyph: glyphs.unset_glyph,
                header: !no_header,
            };

            let mut first = true;
            for input in &inputs {
                let Some(icon) = read_icon(input, cli.verbose) else {
                    failures += 1;
                    continue;
                };
                if !first {
                    writeln!(stdout)?;
                }
                first = false;
                write_to(&mut stdout, &icon, &opts)?;
            }
        }

        Commands::Info { inputs } => {
            for input in &inputs {
                let Some(icon) = read_icon(input, cli.verbose) else {
                    failures += 1;
                    continue;
                };
                writeln!(
                    stdout,
                    "{}: {}, {}x{}, version {}, {} pixels set",
                    input.display(),
                    icon.name(),
                    icon.width(),
                    icon.height(),
                    icon.version(),
                    icon.set_pixel_count()
                )?;
            }
        }
    }

    stdout.flush()?;

    if failures > 0 {
        eprintln!("{failures} input(s) failed to load");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Loads one input, reporting failures on stderr.
fn read_icon(input: &Path, verbose: bool) -> Option<Icon> {
    if verbose {
        eprintln!("Loading '{}'", input.display());
    }

    let result: Result<Icon, IconError> = if input.as_os_str() == "-" {
        load_from_reader(io::stdin().lock())
    } else {
        load(input)
    };

    match result {
        Ok(icon) => {
            if verbose {
                eprintln!(
                    "Decoded '{}': {}x{}, version {}",
                    input.display(),
                    icon.width(),
                    icon.height(),
                    icon.version()
                );
            }
            Some(icon)
        }
        Err(e) => {
            eprintln!("Failed to load icon from '{}': {}", input.display(), e);
            None
        }
    }
}
