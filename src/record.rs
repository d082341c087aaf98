//! Dataset records.
use serde::Deserialize;

use crate::error::Error;
use crate::normalize::clean_text;

/// A single training example, decoded from one line of the source file.
///
/// Field names follow the dataset convention (`uid`, `title`, `content`,
/// `target_ind`, `target_rel`). `uid` is carried along but never written
/// out. Absent and `null` fields are equivalent.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Record {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub target_ind: Option<Vec<u64>>,
    #[serde(default)]
    pub target_rel: Option<Vec<f64>>,
}

impl Record {
    /// Label indices of this record, empty when absent.
    pub fn indices(&self) -> &[u64] {
        self.target_ind.as_deref().unwrap_or(&[])
    }

    /// `(index, relevance)` pairs of this record, sorted ascending by index.
    ///
    /// Absent or empty relevances default to exactly 1.0 per index. The sort
    /// is stable: duplicate indices are kept and keep their input order.
    /// `ordinal` is the 1-based position of the record among non-blank lines,
    /// used to identify it when the relevance count does not match.
    pub fn label_pairs(&self, ordinal: usize) -> Result<Vec<(u64, f64)>, Error> {
        let indices = self.indices();
        let relevances: Vec<f64> = match self.target_rel.as_deref() {
            None | Some([]) => vec![1.0; indices.len()],
            Some(relevances) => relevances.to_vec(),
        };

        if relevances.len() != indices.len() {
            return Err(Error::LabelWeightMismatch {
                record: ordinal,
                indices: indices.len(),
                relevances: relevances.len(),
            });
        }

        let mut pairs: Vec<(u64, f64)> = indices.iter().copied().zip(relevances).collect();
        pairs.sort_by_key(|&(index, _)| index);
        Ok(pairs)
    }

    /// Text line of this record: the normalized title, joined with the
    /// normalized content by a single space unless `title_only` is set or
    /// the content is empty.
    pub fn text_line(&self, title_only: bool) -> String {
        let title = clean_text(self.title.as_deref());
        if title_only {
            return title;
        }

        let content = clean_text(self.content.as_deref());
        if content.is_empty() {
            title
        } else {
            format!("{} {}", title, content)
        }
    }
}
