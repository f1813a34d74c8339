use std::{
    fs::File,
    io::{self, BufRead as _, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use chrono::NaiveDate;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Opens `output_path`, or stdout when the path is `-`.
    pub fn from_output_path(output_path: PathBuf) -> anyhow::Result<Self> {
        if output_path.as_os_str() == "-" {
            Ok(Output::stdout())
        } else {
            Output::open(output_path)
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// File name for an export taken on `date`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("softball-roster-backup-{}.csv", date.format("%Y-%m-%d"))
}

/// Asks a yes/no question on stderr and reads the answer from stdin.
///
/// Only `y` or `yes` (any case) counts as consent; end of input declines.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    eprint!("{prompt} [y/N] ");
    io::stderr().flush().context("Failed to flush prompt")?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(is_consent(&answer))
}

fn is_consent(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
