//! Command line interface for the fretboard tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fretboard::{CagedForm, ChordType, LabelMode, Note};

/// Explore scales, diatonic chords and chord voicings on a guitar neck
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a scale, its diatonic chords and where it lies on the neck
    Scale(ScaleCommand),

    /// Show a chord voicing, optionally as a CAGED shape
    Chord(ChordCommand),

    /// Render the view described by a settings file
    Show(ShowCommand),

    /// List available scales, chord types and CAGED forms
    List,
}

#[derive(Parser, Debug)]
pub struct ScaleCommand {
    /// Root note (C, C#, D, ... B)
    pub root: Note,

    /// Scale name, e.g. "major" or "minor-pentatonic"
    #[arg(short, long, default_value = "Major")]
    pub scale: String,

    /// Position labels: note, degree or finger
    #[arg(short, long, default_value = "note")]
    pub labels: LabelMode,

    /// Number of frets to draw
    #[arg(short, long, default_value_t = fretboard::FRET_COUNT, value_parser = clap::value_parser!(u8).range(1..=24))]
    pub frets: u8,
}

#[derive(Parser, Debug)]
pub struct ChordCommand {
    /// Root note (C, C#, D, ... B)
    pub root: Note,

    /// Chord type, e.g. major, m7, sus4
    #[arg(short = 't', long = "type", default_value = "major")]
    pub chord_type: ChordType,

    /// CAGED form to move up the neck (C, A, G, E or D)
    #[arg(short = 'F', long)]
    pub form: Option<CagedForm>,

    /// Position labels: note, degree or finger
    #[arg(short, long, default_value = "note")]
    pub labels: LabelMode,

    /// Number of frets to draw
    #[arg(short, long, default_value_t = fretboard::FRET_COUNT, value_parser = clap::value_parser!(u8).range(1..=24))]
    pub frets: u8,
}

#[derive(Parser, Debug)]
pub struct ShowCommand {
    /// YAML settings file
    #[arg(short, long)]
    pub config: PathBuf,
}
