/*!
# IO utilities

Line-oriented reading of JSONL datasets and writing of the paired
text/label corpus files.
!*/
pub mod reader;
pub mod writer;

pub use reader::RecordReader;
pub use writer::CorpusWriter;
