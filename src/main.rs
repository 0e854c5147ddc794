//! Binary entry point that exercises the firmware data tables from the
//! command line. Summarizing the pipeline here keeps the intent obvious when
//! revisiting the code: we read the tokenizer defaults off the arguments,
//! validate or pretty-print the requested melodies, and dump the string
//! tables so the whole data set can be eyeballed at once.

use anyhow::{bail, Context, Result};

use oclock_data::tables::strings::{MONTH_NAMES, SETTINGS_LABELS, WEEKDAY_NAMES};
use oclock_data::{parse_melody, render_melody, song, NotationDefaults, SONGS, SPLASH_LINES};

/// Octave assumed when `--octave` is absent. The library refuses to guess
/// the tokenizer defaults, but a command line has to pick something; these
/// are stated here, at the boundary, where a user can see and override them.
const CLI_DEFAULT_OCTAVE: u8 = 5;
/// Duration assumed when `--duration` is absent.
const CLI_DEFAULT_DURATION: u8 = 4;

/// Validate the built-in tables or pretty-print the named melodies.
///
/// Returning a `Result` bubbles unknown song names and malformed arguments
/// to the terminal with context instead of crashing silently.
fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (defaults, names) = parse_args(&args)?;

    if names.is_empty() {
        summarize_melodies(&defaults)?;
        print_string_tables();
    } else {
        for name in &names {
            print_melody(name, &defaults)?;
        }
    }

    Ok(())
}

/// Read `--octave`/`--duration` plus any positional song names off the
/// argument list.
fn parse_args(args: &[String]) -> Result<(NotationDefaults, Vec<String>)> {
    let mut octave = CLI_DEFAULT_OCTAVE;
    let mut duration = CLI_DEFAULT_DURATION;
    let mut names = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--octave" => {
                let value = iter.next().context("--octave requires a value")?;
                octave = value
                    .parse()
                    .with_context(|| format!("invalid --octave value `{value}`"))?;
            }
            "--duration" => {
                let value = iter.next().context("--duration requires a value")?;
                duration = value
                    .parse()
                    .with_context(|| format!("invalid --duration value `{value}`"))?;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => bail!("unknown flag `{flag}`"),
            name => names.push(name.to_string()),
        }
    }

    Ok((NotationDefaults::new(octave, duration), names))
}

fn print_usage() {
    println!("Usage: oclock-data [--octave N] [--duration N] [SONG_NAME...]");
    println!();
    println!("Without song names, validates every built-in melody and prints the");
    println!("string tables. --octave/--duration set the tokenizer defaults used");
    println!("when a melody header omits o= or d= (default: octave {CLI_DEFAULT_OCTAVE}, duration {CLI_DEFAULT_DURATION}).");
}

/// Parse every registry melody and print a one-line summary each, failing
/// loudly if any entry no longer parses.
fn summarize_melodies(defaults: &NotationDefaults) -> Result<()> {
    println!("Melodies (defaults: octave {}, duration {}):", defaults.octave, defaults.duration);
    for (name, notation) in SONGS {
        let melody = parse_melody(notation, defaults)
            .with_context(|| format!("melody `{name}` failed to parse"))?;
        println!(
            "  {name}: {} notes, {:.3} whole notes, canonical `{}`",
            melody.len(),
            melody.total_whole_notes(),
            render_melody(&melody)
        );
    }
    Ok(())
}

/// Pretty-print one melody note by note.
fn print_melody(name: &str, defaults: &NotationDefaults) -> Result<()> {
    let notation = song(name).with_context(|| format!("no melody named `{name}`"))?;
    let melody = parse_melody(notation, defaults)
        .with_context(|| format!("melody `{name}` failed to parse"))?;

    println!("{name}: {notation:?}");
    println!(
        "  header: octave {}, duration {}",
        melody.default_octave, melody.default_duration
    );
    for note in &melody.notes {
        println!("  {note}  ({:.4} whole notes)", note.whole_notes());
    }
    Ok(())
}

/// Dump every string table in its firmware order.
fn print_string_tables() {
    println!("\nWeekdays:");
    for (index, name) in WEEKDAY_NAMES.iter().enumerate() {
        println!("  {index}: {name:?}");
    }

    println!("Months:");
    for (index, name) in MONTH_NAMES.iter().enumerate() {
        println!("  {index}: {name:?}");
    }

    println!("Settings labels:");
    for (index, label) in SETTINGS_LABELS.iter().enumerate() {
        println!("  {index}: {label:?}");
    }

    println!("Splash:");
    for line in SPLASH_LINES {
        println!("  {line}");
    }
}
