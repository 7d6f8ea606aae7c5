//! Progress and summary output.
//!
//! Reporters receive [`Snapshot`]s from the counting engine and write them to
//! any [`Write`] sink, flushing after each line so progress is visible while a
//! long file is still being read.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::tally::Snapshot;

/// Receives events from the counting engine
pub trait Reporter {
    /// Called before the first record of each input file
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn file_started(&mut self, path: &Path) -> io::Result<()>;

    /// Called every N records; `records_in_file` is the 1-based index of the
    /// current record within its file
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn progress(&mut self, records_in_file: u64, snapshot: &Snapshot) -> io::Result<()>;

    /// Called once after all files are processed
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn summary(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

/// Human-readable, one line per event
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn file_started(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Processing VCF file {}", path.display())?;
        self.out.flush()
    }

    fn progress(&mut self, records_in_file: u64, snapshot: &Snapshot) -> io::Result<()> {
        writeln!(
            self.out,
            "num records={} tot={} ti={} tv={} ti/tv={}",
            records_in_file,
            snapshot.total_records,
            snapshot.transitions,
            snapshot.transversions,
            snapshot.ratio,
        )?;
        self.out.flush()
    }

    fn summary(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        writeln!(
            self.out,
            "tot={} ti={} tv={} ti/tv={}",
            snapshot.total_records, snapshot.transitions, snapshot.transversions, snapshot.ratio,
        )?;
        self.out.flush()
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonEvent<'a> {
    FileStarted {
        path: String,
    },
    Progress {
        records_in_file: u64,
        #[serde(flatten)]
        snapshot: &'a Snapshot,
    },
    Summary {
        #[serde(flatten)]
        snapshot: &'a Snapshot,
    },
}

/// JSON Lines: one object per event, with an `event` field
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &JsonEvent<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn file_started(&mut self, path: &Path) -> io::Result<()> {
        self.emit(&JsonEvent::FileStarted {
            path: path.display().to_string(),
        })
    }

    fn progress(&mut self, records_in_file: u64, snapshot: &Snapshot) -> io::Result<()> {
        self.emit(&JsonEvent::Progress {
            records_in_file,
            snapshot,
        })
    }

    fn summary(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.emit(&JsonEvent::Summary { snapshot })
    }
}

const TSV_HEADER: &str = "event\trecords_in_file\ttotal_records\ttransitions\ttransversions\tratio";

/// Tab-separated rows, header written before the first row
pub struct TsvReporter<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> TsvReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn row(&mut self, event: &str, records_in_file: Option<u64>, snapshot: &Snapshot) -> io::Result<()> {
        if !self.header_written {
            writeln!(self.out, "{TSV_HEADER}")?;
            self.header_written = true;
        }

        let in_file = records_in_file.map_or_else(|| "NA".to_string(), |n| n.to_string());
        writeln!(
            self.out,
            "{event}\t{in_file}\t{}\t{}\t{}\t{}",
            snapshot.total_records, snapshot.transitions, snapshot.transversions, snapshot.ratio,
        )?;
        self.out.flush()
    }
}

impl<W: Write> Reporter for TsvReporter<W> {
    fn file_started(&mut self, path: &Path) -> io::Result<()> {
        tracing::info!(path = %path.display(), "Processing VCF file");
        Ok(())
    }

    fn progress(&mut self, records_in_file: u64, snapshot: &Snapshot) -> io::Result<()> {
        self.row("progress", Some(records_in_file), snapshot)
    }

    fn summary(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.row("summary", None, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tally::Ratio;

    fn snapshot(ti: u64, tv: u64, total: u64) -> Snapshot {
        Snapshot {
            total_records: total,
            transitions: ti,
            transversions: tv,
            ratio: Ratio::of(ti, tv),
        }
    }

    fn text_of(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_progress_line() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter.progress(1000, &snapshot(500, 500, 1000)).unwrap();

        assert_eq!(
            text_of(reporter.into_inner()),
            "num records=1000 tot=1000 ti=500 tv=500 ti/tv=1.0\n"
        );
    }

    #[test]
    fn test_text_summary_line() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter.summary(&snapshot(5, 2, 9)).unwrap();

        assert_eq!(text_of(reporter.into_inner()), "tot=9 ti=5 tv=2 ti/tv=2.5\n");
    }

    #[test]
    fn test_text_undefined_ratio() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter.summary(&snapshot(3, 0, 3)).unwrap();

        assert_eq!(text_of(reporter.into_inner()), "tot=3 ti=3 tv=0 ti/tv=NA\n");
    }

    #[test]
    fn test_text_file_started() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter.file_started(Path::new("calls.vcf")).unwrap();

        assert_eq!(text_of(reporter.into_inner()), "Processing VCF file calls.vcf\n");
    }

    #[test]
    fn test_json_events() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.file_started(Path::new("a.vcf")).unwrap();
        reporter.progress(10, &snapshot(4, 2, 10)).unwrap();
        reporter.summary(&snapshot(4, 0, 10)).unwrap();

        let text = text_of(reporter.into_inner());
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["event"], "file_started");
        assert_eq!(lines[0]["path"], "a.vcf");

        assert_eq!(lines[1]["event"], "progress");
        assert_eq!(lines[1]["records_in_file"], 10);
        assert_eq!(lines[1]["total_records"], 10);
        assert_eq!(lines[1]["ratio"], 2.0);

        assert_eq!(lines[2]["event"], "summary");
        assert_eq!(lines[2]["transitions"], 4);
        assert!(lines[2]["ratio"].is_null());
    }

    #[test]
    fn test_tsv_rows() {
        let mut reporter = TsvReporter::new(Vec::new());
        reporter.file_started(Path::new("a.vcf")).unwrap();
        reporter.progress(2, &snapshot(1, 1, 2)).unwrap();
        reporter.summary(&snapshot(1, 1, 3)).unwrap();

        let text = text_of(reporter.into_inner());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], TSV_HEADER);
        assert_eq!(lines[1], "progress\t2\t2\t1\t1\t1.0");
        assert_eq!(lines[2], "summary\tNA\t3\t1\t1\t1.0");
    }
}
