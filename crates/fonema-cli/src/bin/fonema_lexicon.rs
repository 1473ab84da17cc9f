// fonema-lexicon: Re-key a base lexicon through the orthographic
// normalizer.
//
// Reads word<TAB>pronunciation lines from the given file (or stdin when
// the argument is "-") and writes <LEXICON_KEY> <pronunciation> lines to
// stdout, so base entries share one key space with the G2P output.
// Lines that do not parse, and words that normalize to nothing, are
// skipped with a warning on stderr; they are never fatal.
//
// Usage:
//   fonema-lexicon FILE
//   fonema-lexicon - < lexicon.tsv

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use fonema_es::lexicon::rekey_line;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if fonema_cli::wants_help(&args) {
        println!("fonema-lexicon: Re-key a base lexicon through the orthographic normalizer.");
        println!();
        println!("Usage: fonema-lexicon FILE");
        println!();
        println!("Reads word<TAB>pronunciation lines from FILE (\"-\" for stdin)");
        println!("and writes <LEXICON_KEY> <pronunciation> lines to stdout.");
        println!("Unusable lines are skipped with a warning on stderr.");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    if args.len() != 1 {
        fonema_cli::fatal("expected exactly one argument: FILE, or \"-\" for stdin (see --help)");
    }

    let reader: Box<dyn BufRead> = if args[0] == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        match File::open(&args[0]) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(e) => fonema_cli::fatal(&format!("cannot open {}: {e}", args[0])),
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (line_num, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading input: {e}");
                break;
            }
        };
        match rekey_line(&line) {
            Ok(Some(entry)) => {
                let _ = writeln!(out, "{} {}", entry.key, entry.pronunciation);
            }
            Ok(None) => {}
            Err(e) => eprintln!("warning: line {}: {e}", line_num + 1),
        }
    }
}
