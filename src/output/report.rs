//! Dead link report file
//!
//! The report is plain text, one `dead link <url> found at: <referrer>` line
//! per entry in discovery order. It is rewritten from scratch every time a
//! new dead link is recorded, so the file always holds the complete report.

use crate::output::traits::DeadLinkReporter;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Formats a single report line
pub fn format_dead_link(url: &str, referrer: &str) -> String {
    format!("dead link {} found at: {}", url, referrer)
}

/// Writes every line to `path`, truncating whatever was there before
pub fn save_dead_links<S: AsRef<str>>(path: &Path, dead_links: &[S]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    for line in dead_links {
        writeln!(writer, "{}", line.as_ref())?;
    }

    writer.flush()
}

/// Reporter that keeps the report in memory and mirrors it to a file
#[derive(Debug, Clone)]
pub struct FileReporter {
    path: PathBuf,
    dead_links: Vec<String>,
}

impl FileReporter {
    /// Creates a reporter writing to `path`
    ///
    /// Nothing is written until the first dead link is recorded.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dead_links: Vec::new(),
        }
    }

    /// Path of the report file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeadLinkReporter for FileReporter {
    fn record_dead_link(&mut self, referrer: &str, url: &str, status_code: u16) {
        tracing::error!(
            "Dead link: {} found on: {} (status code: {})",
            url,
            referrer,
            status_code
        );

        self.dead_links.push(format_dead_link(url, referrer));

        if let Err(e) = save_dead_links(&self.path, self.dead_links.as_slice()) {
            tracing::error!(
                "Error saving dead links to {}: {}",
                self.path.display(),
                e
            );
        }
    }

    fn dead_links(&self) -> &[String] {
        &self.dead_links
    }
}
