use super::record::Record;
use crate::ReadRecord;
use eyre::{ensure, eyre, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub mod parse {
    use super::*;
    use contigprobe_core_rs::loc::Interval;

    pub fn coordinate<'a>(
        parts: &mut impl Iterator<Item = &'a str>,
        column: &str,
    ) -> Result<u64> {
        let value = parts
            .next()
            .ok_or_else(|| eyre!("Missing show-coords {} column", column))?;
        value
            .parse::<u64>()
            .wrap_err_with(|| format!("Invalid show-coords {} value: {}", column, value))
    }

    pub fn identity<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<f64> {
        let value = parts
            .next()
            .ok_or_else(|| eyre!("Missing show-coords % IDY column"))?;
        value
            .parse::<f64>()
            .wrap_err_with(|| format!("Invalid show-coords % IDY value: {}", value))
    }

    pub fn tag<'a>(parts: &mut impl Iterator<Item = &'a str>, column: &str) -> Result<String> {
        let value = parts
            .next()
            .ok_or_else(|| eyre!("Missing show-coords {} column", column))?;
        Ok(value.to_owned())
    }

    pub fn record<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Record> {
        let (s1, e1) = (coordinate(parts, "S1")?, coordinate(parts, "E1")?);
        let (s2, e2) = (coordinate(parts, "S2")?, coordinate(parts, "E2")?);
        let len1 = coordinate(parts, "LEN 1")?;
        let len2 = coordinate(parts, "LEN 2")?;
        let identity = identity(parts)?;
        let reference = tag(parts, "TAG 1")?;
        let query = tag(parts, "TAG 2")?;

        let span = Interval::new(s1, e1).wrap_err("Invalid show-coords reference span")?;
        Record::new(span, s2, e2, len1, len2, identity, reference, query)
    }
}

/// Reader for `show-coords -HT` tables. Blank lines are skipped.
pub struct Reader<R> {
    reader: R,
    buffer: String,
    lineno: usize,
}

impl<R> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            lineno: 0,
        }
    }
}

impl Reader<BufReader<File>> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading show-coords table from {}", path.display());
        let file = File::open(path)
            .wrap_err_with(|| format!("Failed to open show-coords table: {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Record;

    fn read_record(&mut self, into: &mut Record) -> Result<bool> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(false);
            }
            self.lineno += 1;

            let line = self.buffer.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }

            let lineno = self.lineno;
            let mut parts = line.split_whitespace();
            *into = parse::record(&mut parts).wrap_err_with(|| {
                format!("Failed to parse show-coords record at line {}: {}", lineno, line)
            })?;
            ensure!(
                parts.next().is_none(),
                "show-coords record at line {} has too many fields: {}",
                lineno,
                line
            );
            return Ok(true);
        }
    }
}
