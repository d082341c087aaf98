/*! Dataset reading utilities

[RecordReader] implements [Iterator] over decoded records, one per
non-blank input line. Both conversion passes go through it, so they agree
on which lines are skipped and on how lines are decoded.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::Path,
};

use crate::error::Error;
use crate::record::Record;

/// Reader that yields one [Record] per non-blank line of a JSONL source.
///
/// Lines that are blank after trimming are skipped and do not count as
/// instances. The physical line number (1-based) is tracked for error
/// reporting.
pub struct RecordReader<T> {
    lines: Lines<BufReader<T>>,
    line: usize,
}

impl RecordReader<File> {
    pub fn open(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Ok(Self::new(BufReader::new(handle)))
    }
}

impl<T> RecordReader<T>
where
    T: Read,
{
    pub fn new(br: BufReader<T>) -> Self {
        Self {
            lines: br.lines(),
            line: 0,
        }
    }

    /// Physical line number of the last line read (1-based).
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<T> Iterator for RecordReader<T>
where
    T: Read,
{
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            self.line += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            return Some(serde_json::from_str(trimmed).map_err(|e| Error::Decode {
                line: self.line,
                source: e,
            }));
        }
    }
}
