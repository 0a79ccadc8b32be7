// Query files for `mummerplot -Q`: one space-separated line per query sequence.
//
// Columns:
// 1. tag: query sequence id, no whitespace
// 2. length: u64, full length of the query sequence
// 3. orientation: [+|-]

use crate::WriteRecord;
use contigprobe_core_rs::loc::Orientation;
use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Name suffix appended by Arrow polishing to FALCON contig ids.
pub const POLISH_SUFFIX: &str = "|arrow";

/// Drop the Arrow polishing suffix, if present, to recover the original contig id.
pub fn strip_polish_suffix(name: &str) -> &str {
    name.strip_suffix(POLISH_SUFFIX).unwrap_or(name)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Dissolve, Getters)]
pub struct Entry {
    name: String,
    length: u64,
    orientation: Orientation,
}

impl Entry {
    pub fn new(name: String, length: u64, orientation: Orientation) -> Result<Self> {
        ensure!(!name.is_empty(), "qfile tag can't be empty");
        ensure!(
            !name.chars().any(|c| c.is_whitespace()),
            "qfile tag can't contain whitespace, got: {:?}",
            name
        );
        ensure!(
            orientation != Orientation::Dual,
            "qfile orientation must be either + or -, got: {}",
            orientation
        );
        Ok(Self {
            name,
            length,
            orientation,
        })
    }
}

pub struct Writer<W> {
    writer: W,
}

impl<W: Write> Writer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Writer<BufWriter<File>> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .wrap_err_with(|| format!("Failed to create qfile: {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> WriteRecord for Writer<W> {
    type Record = Entry;

    fn write_record(&mut self, entry: &Self::Record) -> Result<()> {
        writeln!(
            self.writer,
            "{} {} {}",
            entry.name(),
            entry.length(),
            entry.orientation()
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
