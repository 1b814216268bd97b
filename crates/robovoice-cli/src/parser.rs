//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use robovoice_core::{DEFAULT_RATE, DEFAULT_TEXT, DEFAULT_VOICE};
use robovoice_runtime::{DEFAULT_FFMPEG_PROGRAM, DEFAULT_SAY_PROGRAM};

/// Command-line interface for the robot voice generator.
///
/// With no flags, speaks `text` into `<filename>.aiff` and converts it to
/// `<filename>.wav`.
#[derive(Debug, Parser)]
#[command(name = "robovoice")]
#[command(about = "Speak text in a robot voice and save it as an audio file")]
#[command(version)]
pub struct Cli {
    /// Text to speak
    #[arg(default_value = DEFAULT_TEXT, value_parser = NonEmptyStringValueParser::new())]
    pub text: String,

    /// Output base filename without extension (derived from the text if omitted)
    #[arg(short = 'f', long = "filename", value_parser = NonEmptyStringValueParser::new())]
    pub filename: Option<String>,

    /// Play only, skip file creation
    #[arg(short = 'p', long = "play")]
    pub play: bool,

    /// Voice passed to the speech command
    #[arg(long, default_value = DEFAULT_VOICE)]
    pub voice: String,

    /// Speaking rate in words per minute
    #[arg(long, default_value_t = DEFAULT_RATE, value_parser = clap::value_parser!(u32).range(1..))]
    pub rate: u32,

    /// Directory to write audio files into
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Speech synthesis program
    #[arg(long, env = "ROBOVOICE_SAY", default_value = DEFAULT_SAY_PROGRAM)]
    pub say_program: String,

    /// Media conversion program
    #[arg(long, env = "ROBOVOICE_FFMPEG", default_value = DEFAULT_FFMPEG_PROGRAM)]
    pub ffmpeg_program: String,

    /// List the voices the speech program offers and exit
    #[arg(long, conflicts_with = "check_deps")]
    pub list_voices: bool,

    /// Check that the speech and conversion programs are installed and exit
    #[arg(long)]
    pub check_deps: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
