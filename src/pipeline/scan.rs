/*! Dataset scanning (pass 1)

Streams the whole dataset once to count instances and derive the class
count from the maximum label index seen. Nothing is materialized: the scan
holds one decoded record plus two counters.
!*/
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::io::reader::RecordReader;

/// Numbering convention of label indices in the source dataset.
///
/// Only affects the class-count derivation: with [LabelOrigin::Zero] the
/// label space size is `max + 1`, with [LabelOrigin::One] it is `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOrigin {
    Zero,
    One,
}

impl LabelOrigin {
    pub fn from_flag(one_based: bool) -> Self {
        if one_based {
            Self::One
        } else {
            Self::Zero
        }
    }

    /// Label space size given the maximum observed index,
    /// 0 when no label was observed at all.
    fn class_count(&self, max_label: Option<u64>) -> u64 {
        match (self, max_label) {
            (_, None) => 0,
            (LabelOrigin::Zero, Some(max)) => max + 1,
            (LabelOrigin::One, Some(max)) => max,
        }
    }
}

/// Instance and class counts of a dataset, as written in the label file
/// header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    pub instances: usize,
    pub classes: u64,
}

/// Scans `src`, counting instances and tracking the maximum label index.
///
/// Decoding and blank-line skipping go through [RecordReader], the same
/// reader the emit pass uses, so both passes always agree on what counts
/// as an instance.
pub fn scan(src: &Path, origin: LabelOrigin) -> Result<DatasetSummary, Error> {
    debug!("scanning {:?}", src);
    scan_records(RecordReader::open(src)?, origin)
}

fn scan_records<T>(reader: RecordReader<T>, origin: LabelOrigin) -> Result<DatasetSummary, Error>
where
    T: Read,
{
    let mut instances = 0;
    let mut max_label = None;

    for record in reader {
        let record = record?;
        for &index in record.indices() {
            if max_label.map_or(true, |max| index > max) {
                max_label = Some(index);
            }
        }
        instances += 1;
    }

    Ok(DatasetSummary {
        instances,
        classes: origin.class_count(max_label),
    })
}
