// fonema-g2p: Build pronunciation-lexicon entries for words from stdin.
//
// Reads one word or phrase per line and writes one lexicon line per
// word:
//   <LEXICON_KEY> <phoneme> <phoneme> ...
// Diagnostics (engine failures, IPA symbols missing from the segment
// map) go to stderr and never interleave with the lexicon output.
//
// The external transcription engine is a line-oriented child process: it
// receives one upper-cased word per line on stdin and must answer with
// one IPA line on stdout. Words the engine cannot transcribe degrade to
// the fallback pronunciation; only a failure to start the engine aborts
// the run.
//
// Usage:
//   fonema-g2p --engine CMD < words.txt > lexicon.txt
//
// Options:
//   -e, --engine CMD   Transcription engine command (default: $FONEMA_ENGINE)
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

use fonema_es::pipeline::{Diagnostic, Transcriber};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (engine_cmd, args) = fonema_cli::parse_engine(&args);

    if fonema_cli::wants_help(&args) {
        println!("fonema-g2p: Build pronunciation-lexicon entries for words from stdin.");
        println!();
        println!("Usage: fonema-g2p --engine CMD < words.txt > lexicon.txt");
        println!();
        println!("Reads words from stdin (one per line). Prints one lexicon line");
        println!("per word: <LEXICON_KEY> <space-joined phoneme sequence>.");
        println!("Diagnostics go to stderr.");
        println!();
        println!("Options:");
        println!("  -e, --engine CMD   Transcription engine command; the command");
        println!("                     reads one word per line on stdin and answers");
        println!("                     with one IPA line (default: $FONEMA_ENGINE)");
        println!("  -h, --help         Print this help");
        return;
    }

    let engine =
        fonema_cli::spawn_engine(engine_cmd.as_deref()).unwrap_or_else(|e| fonema_cli::fatal(&e));
    let transcriber = Transcriber::new(engine);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let Some(entry) = transcriber.transcribe(&line) else {
            continue;
        };

        for note in &entry.notes {
            match note {
                Diagnostic::UnmappedSymbol { symbol, offset, ipa } => eprintln!(
                    "warning: {}: no segment-map entry for {symbol:?} at offset {offset} in {ipa:?}",
                    entry.key
                ),
                Diagnostic::EngineFailure { message } => {
                    eprintln!("warning: {}: engine failed: {message}", entry.key)
                }
            }
        }

        let _ = writeln!(out, "{} {}", entry.key, entry.pronunciation);
    }
}
