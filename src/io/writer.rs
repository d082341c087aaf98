/*! Corpus writing utilities

[CorpusWriter] holds the two output handles of a conversion run: the text
corpus file (`<prefix>_X.txt`) and the label file (`<prefix>_X_Y.txt`).
Both are truncated on creation and written strictly in instance order.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::info;

use crate::error::Error;
use crate::pipeline::DatasetSummary;

/// Paired writer for a text corpus file and its label file.
pub struct CorpusWriter {
    text: BufWriter<File>,
    labels: BufWriter<File>,
    text_path: PathBuf,
    labels_path: PathBuf,
}

impl CorpusWriter {
    /// Creates (truncating) `<prefix>_X.txt` and `<prefix>_X_Y.txt` in `dst`.
    ///
    /// `dst` has to exist already.
    pub fn new(dst: &Path, prefix: &str) -> Result<Self, Error> {
        let text_path = dst.join(format!("{}_X.txt", prefix));
        let labels_path = dst.join(format!("{}_X_Y.txt", prefix));

        info!("creating {:?}", text_path);
        let text = BufWriter::new(File::create(&text_path)?);
        info!("creating {:?}", labels_path);
        let labels = BufWriter::new(File::create(&labels_path)?);

        Ok(Self {
            text,
            labels,
            text_path,
            labels_path,
        })
    }

    /// Writes the label file header. Has to be called before any
    /// [CorpusWriter::write_instance].
    pub fn write_header(&mut self, summary: &DatasetSummary) -> Result<(), Error> {
        writeln!(self.labels, "{} {}", summary.instances, summary.classes)?;
        Ok(())
    }

    /// Appends one instance: a text line and its matching label line.
    ///
    /// Pairs render as `index:weight` with exactly 5 decimal places,
    /// space-joined. No pairs yields an empty label line.
    pub fn write_instance(&mut self, text: &str, pairs: &[(u64, f64)]) -> Result<(), Error> {
        writeln!(self.text, "{}", text)?;

        let line = pairs
            .iter()
            .map(|&(index, weight)| format!("{}:{:.5}", index, weight))
            .join(" ");
        writeln!(self.labels, "{}", line)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.text.flush()?;
        self.labels.flush()?;
        Ok(())
    }

    /// Path of the text corpus file.
    pub fn text_path(&self) -> &Path {
        &self.text_path
    }

    /// Path of the label file.
    pub fn labels_path(&self) -> &Path {
        &self.labels_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn writes_paired_files() {
        let dst = tempfile::tempdir().unwrap();
        let mut cw = CorpusWriter::new(dst.path(), "trn").unwrap();

        cw.write_header(&DatasetSummary {
            instances: 2,
            classes: 6,
        })
        .unwrap();
        cw.write_instance("first instance", &[(1, 0.9), (3, 0.5), (5, 0.2)])
            .unwrap();
        cw.write_instance("second instance", &[])
            .unwrap();
        cw.flush().unwrap();

        assert_eq!(
            read(cw.text_path()),
            "first instance\nsecond instance\n"
        );
        assert_eq!(
            read(cw.labels_path()),
            "2 6\n1:0.90000 3:0.50000 5:0.20000\n\n"
        );
    }

    #[test]
    fn weights_render_with_five_decimals() {
        let dst = tempfile::tempdir().unwrap();
        let mut cw = CorpusWriter::new(dst.path(), "t").unwrap();

        cw.write_instance("x", &[(0, 1.0), (7, 0.123456)]).unwrap();
        cw.flush().unwrap();

        assert_eq!(read(cw.labels_path()), "0:1.00000 7:0.12346\n");
    }

    #[test]
    fn truncates_previous_contents() {
        let dst = tempfile::tempdir().unwrap();
        let stale = dst.path().join("trn_X.txt");
        std::fs::write(&stale, "stale contents\n").unwrap();

        let mut cw = CorpusWriter::new(dst.path(), "trn").unwrap();
        cw.write_instance("fresh", &[]).unwrap();
        cw.flush().unwrap();

        assert_eq!(read(&stale), "fresh\n");
    }
}
