//! CLI command implementations.

use crate::render::{self, Success};
use crate::shell::{Shell, ShellConfig};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use trellis_graph::SocialGraph;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Run the interactive menu on the terminal.
pub fn shell(json: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let config = ShellConfig {
        json,
        interactive: true,
    };

    let mut shell = Shell::new(SocialGraph::new(), stdin.lock(), stdout.lock(), config);
    shell.run()?;

    Ok(())
}

/// Replay a script of menu answers, then print graph statistics.
pub fn run(script: &Path, json: bool) -> Result<()> {
    let file = File::open(script)
        .map_err(|e| format!("cannot open script {}: {}", script.display(), e))?;
    tracing::debug!(script = %script.display(), "replaying script");

    let stdout = io::stdout();
    let config = ShellConfig {
        json,
        interactive: false,
    };

    let mut shell = Shell::new(SocialGraph::new(), BufReader::new(file), stdout.lock(), config);
    shell.run()?;
    let stats = shell.graph().stats();
    drop(shell);

    let mut out = stdout.lock();
    if json {
        serde_json::to_writer(&mut out, &Success::new(&stats))?;
        writeln!(out)?;
    } else {
        writeln!(out)?;
        for line in render::stats(&stats) {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}
