use super::Record;
use crate::WriteRecord;
use contigprobe_core_rs::loc::IntervalOp;
use eyre::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

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
            .wrap_err_with(|| format!("Failed to create BED file: {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> WriteRecord for Writer<W> {
    type Record = Record;

    fn write_record(&mut self, record: &Self::Record) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}",
            record.seqid(),
            record.interval().start(),
            record.interval().end(),
            record.name()
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
