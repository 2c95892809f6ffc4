use clap::Parser;
use env_logger::Env;
use std::process;

mod cli;
use cli::{ChordCommand, Cli, Commands, ScaleCommand, ShowCommand};

use fretboard::{
    chord_playback, find_scale, render_fretboard, FretboardError, FretboardView, PlaybackStyle,
    Settings, ViewContent, CAGED_FORMS, CHORD_TYPES, SCALES,
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scale(cmd) => show_scale(cmd),
        Commands::Chord(cmd) => show_chord(cmd),
        Commands::Show(cmd) => show_settings(cmd),
        Commands::List => {
            list_catalog();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn show_scale(cmd: ScaleCommand) -> Result<(), FretboardError> {
    let scale = find_scale(&cmd.scale)?;
    print_view(&FretboardView::scale(cmd.root, scale, cmd.labels, cmd.frets));
    Ok(())
}

fn show_chord(cmd: ChordCommand) -> Result<(), FretboardError> {
    print_view(&FretboardView::chord(
        cmd.root,
        cmd.chord_type,
        cmd.form,
        cmd.labels,
        cmd.frets,
    ));
    Ok(())
}

fn show_settings(cmd: ShowCommand) -> Result<(), FretboardError> {
    let settings = Settings::load(&cmd.config)?;
    print_view(&FretboardView::from_settings(&settings));
    Ok(())
}

fn print_view(view: &FretboardView) {
    print!("{}", render_fretboard(view));
    println!();

    match &view.content {
        ViewContent::Scale { notes, diatonic_chords } => {
            let degrees: Vec<String> = notes
                .iter()
                .map(|&note| format!("{} ({})", note, fretboard::degree_name(view.root, note)))
                .collect();
            println!("Notes:    {}", degrees.join("  "));

            if !diatonic_chords.is_empty() {
                let chords: Vec<String> = diatonic_chords
                    .iter()
                    .map(|chord| format!("{} {}", chord.roman_numeral(), chord.label))
                    .collect();
                println!("Diatonic: {}", chords.join("  "));
            }
        }
        ViewContent::Chord { voicing, tones } => {
            let frets: Vec<String> = voicing
                .frets
                .iter()
                .map(|fret| fret.map_or("x".to_string(), |f| f.to_string()))
                .collect();
            let fingers: Vec<String> = voicing.fingers.iter().map(|f| f.to_string()).collect();
            println!("Frets:    {}", frets.join(" "));
            println!("Fingers:  {}", fingers.join(" "));

            let tones: Vec<String> = tones
                .iter()
                .map(|tone| format!("{} ({})", tone.note, tone.degree))
                .collect();
            println!("Tones:    {}", tones.join("  "));

            let midi: Vec<String> = chord_playback(voicing, PlaybackStyle::Block)
                .iter()
                .map(|note| format!("{} ({:.1} Hz)", note.midi_note, note.frequency))
                .collect();
            println!("MIDI:     {}", midi.join("  "));
        }
        ViewContent::Unsupported { .. } => {}
    }
}

fn list_catalog() {
    println!("Scales:");
    for scale in SCALES {
        let intervals: Vec<String> = scale.intervals.iter().map(|i| i.to_string()).collect();
        println!("  {:<18} {}", scale.name, intervals.join(" "));
    }

    let types: Vec<&str> = CHORD_TYPES.iter().map(|t| t.label()).collect();
    println!("Chord types: {}", types.join(", "));

    let forms: Vec<&str> = CAGED_FORMS.iter().map(|f| f.name()).collect();
    println!("CAGED forms: {}", forms.join(", "));
}
