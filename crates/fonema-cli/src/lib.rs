// fonema-cli: shared utilities for CLI tools.

use std::cell::RefCell;
use std::io::{BufRead, BufReader, Write};
use std::process::{self, Child, ChildStdin, ChildStdout, Command, Stdio};

use fonema_es::engine::{EngineError, Transliterator};

/// Environment variable naming the external transcription engine command.
pub const ENGINE_ENV: &str = "FONEMA_ENGINE";

/// Parse a `--engine CMD` / `--engine=CMD` / `-e CMD` argument.
///
/// Returns `(engine_command, remaining_args)`. When no argument names an
/// engine, falls back to the `FONEMA_ENGINE` environment variable.
pub fn parse_engine(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut engine = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--engine=") {
            engine = Some(val.to_string());
        } else if arg == "--engine" || arg == "-e" {
            if i + 1 < args.len() {
                engine = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    if engine.is_none() {
        engine = std::env::var(ENGINE_ENV).ok();
    }

    (engine, remaining)
}

/// Start the configured engine, or explain how to configure one.
///
/// Failing to start the engine is the one fatal condition of a run; the
/// caller is expected to exit via [`fatal`].
pub fn spawn_engine(engine: Option<&str>) -> Result<PipeEngine, String> {
    let Some(cmdline) = engine else {
        return Err(format!(
            "no transcription engine configured; pass --engine CMD or set {ENGINE_ENV}"
        ));
    };
    PipeEngine::spawn(cmdline).map_err(|e| format!("failed to start engine {cmdline:?}: {e}"))
}

/// A transcription engine driven over a child process's standard
/// streams: one upper-cased word per line in, one IPA line out.
pub struct PipeEngine {
    io: RefCell<EngineIo>,
}

struct EngineIo {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl PipeEngine {
    /// Spawn `cmdline` (whitespace-split into program and arguments)
    /// with piped stdin/stdout. Stderr is inherited so engine
    /// diagnostics land on the shared error channel.
    pub fn spawn(cmdline: &str) -> Result<Self, EngineError> {
        let mut parts = cmdline.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| EngineError::Engine("empty engine command".to_string()))?;
        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;
        let stdin = child.stdin.take().ok_or(EngineError::Closed)?;
        let stdout = child.stdout.take().ok_or(EngineError::Closed)?;
        Ok(Self {
            io: RefCell::new(EngineIo {
                child,
                stdin,
                stdout: BufReader::new(stdout),
            }),
        })
    }
}

impl Transliterator for PipeEngine {
    fn transliterate(&self, word: &str) -> Result<String, EngineError> {
        let mut io = self.io.borrow_mut();
        writeln!(io.stdin, "{word}")?;
        io.stdin.flush()?;

        let mut line = String::new();
        if io.stdout.read_line(&mut line)? == 0 {
            return Err(EngineError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Drop for PipeEngine {
    fn drop(&mut self) {
        let mut io = self.io.borrow_mut();
        let _ = io.child.kill();
        let _ = io.child.wait();
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
