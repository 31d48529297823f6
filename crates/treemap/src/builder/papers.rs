//! Publication records grouped by research category
//!
//! Each paper is a leaf weighted by its citation count. Its category is a
//! compound string such as `"Pedagogy: Active learning"` that becomes a path
//! of nested categories, optionally below the publication year.

use serde::{Deserialize, Serialize};

use crate::builder::{Record, RecordBuilder};
use crate::error::Result;
use crate::options::TreemapOptions;
use crate::tree::{NodeId, PaperLabeling, TreemapTree};

/// How publication records are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuildMode {
    /// Categories only; the year is ignored
    #[default]
    PathFlattened,
    /// Year as the outermost level, categories below it
    YearFirst,
}

/// Metadata kept on each paper leaf
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperData {
    pub authors: String,
    pub doi: String,
}

/// One row of a publication dataset
///
/// Field names follow the dataset's column headers, so a CSV reader with
/// serde support can deserialize rows directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub authors: String,
    #[serde(rename = "Url")]
    pub doi: String,
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Citations")]
    pub citations: u64,
}

impl PaperRecord {
    /// Category path for this paper
    ///
    /// Empty category segments are dropped.
    pub fn category_path(&self, mode: BuildMode, delimiter: &str) -> Vec<String> {
        let year = match mode {
            BuildMode::YearFirst => Some(self.year.to_string()),
            BuildMode::PathFlattened => None,
        };
        year.into_iter()
            .chain(
                self.category
                    .split(delimiter)
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string),
            )
            .collect()
    }

    pub fn into_record(self, mode: BuildMode, delimiter: &str) -> Record<PaperData> {
        let path = self.category_path(mode, delimiter);
        Record {
            path,
            name: self.title,
            weight: self.citations,
            metadata: PaperData {
                authors: self.authors,
                doi: self.doi,
            },
        }
    }
}

/// Build a labeled paper tree from dataset rows
///
/// Uses the options' colour seed, category delimiter, build mode and root
/// name.
pub fn build_paper_tree<I>(
    records: I,
    options: &TreemapOptions,
) -> Result<(TreemapTree<PaperData>, NodeId)>
where
    I: IntoIterator<Item = PaperRecord>,
{
    let tree = TreemapTree::with_options(options).labeling(PaperLabeling::default());
    let mut builder = RecordBuilder::new(tree);
    for paper in records {
        builder.insert(paper.into_record(options.build_mode, &options.category_delimiter))?;
    }
    builder.finish(options.root_name.clone())
}
