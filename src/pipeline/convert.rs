/*! JSONL to sparse corpus conversion (pass 2)

Two sequential streaming passes over the source: [scan] computes the
header counts, then the source is re-read and every record is emitted as
one text line and one label line. Both passes share [RecordReader], so the
emitted line count always matches the header's instance count.
!*/
use std::fs;
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::reader::RecordReader;
use crate::io::writer::CorpusWriter;

use super::pipeline::Pipeline;
use super::scan::{scan, DatasetSummary, LabelOrigin};

/// Conversion pipeline, configured from the command line.
///
/// Outputs land in `dst` (created if absent) as `<prefix>_X.txt` and
/// `<prefix>_X_Y.txt`. Partially written files of a failed run are left
/// as-is.
pub struct Convert {
    src: PathBuf,
    dst: PathBuf,
    prefix: String,
    title_only: bool,
    origin: LabelOrigin,
}

impl Convert {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        prefix: String,
        title_only: bool,
        origin: LabelOrigin,
    ) -> Self {
        Self {
            src,
            dst,
            prefix,
            title_only,
            origin,
        }
    }
}

impl Pipeline<DatasetSummary> for Convert {
    fn run(&self) -> Result<DatasetSummary, Error> {
        let summary = scan(&self.src, self.origin)?;
        info!(
            "{:?}: {} instances, {} classes",
            self.src, summary.instances, summary.classes
        );

        fs::create_dir_all(&self.dst)?;
        let mut writer = CorpusWriter::new(&self.dst, &self.prefix)?;

        // header goes first, before any record line
        writer.write_header(&summary)?;

        let mut written = 0;
        for record in RecordReader::open(&self.src)? {
            let record = record?;
            let pairs = record.label_pairs(written + 1)?;
            writer.write_instance(&record.text_line(self.title_only), &pairs)?;
            written += 1;
        }
        writer.flush()?;

        info!(
            "done. wrote {} instances (expected {})",
            written, summary.instances
        );
        info!("text   -> {:?}", writer.text_path());
        info!(
            "labels -> {:?} (header: {} {})",
            writer.labels_path(),
            summary.instances,
            summary.classes
        );
        Ok(summary)
    }
}
