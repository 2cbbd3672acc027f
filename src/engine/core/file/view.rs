use indexmap::IndexMap;

use crate::engine::core::column::column_values::ColumnValues;
use crate::engine::core::stats::StatsMap;
use crate::engine::errors::FileError;

/// Which columns [`ResultView::select`] hands back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Names(Vec<String>),
}

impl Selection {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Names(names.into_iter().map(Into::into).collect())
    }
}

/// Decoded columns of one read, keyed by name in decode order, plus the
/// stats block of the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultView {
    frame: IndexMap<String, ColumnValues>,
    stats: StatsMap,
}

impl ResultView {
    pub fn new(frame: IndexMap<String, ColumnValues>, stats: StatsMap) -> Self {
        Self { frame, stats }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.frame.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.frame.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    pub fn stats(&self) -> &StatsMap {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatsMap {
        &mut self.stats
    }

    pub fn set_stats(&mut self, stats: StatsMap) {
        self.stats = stats;
    }

    pub fn column(&self, name: &str) -> Option<&ColumnValues> {
        self.frame.get(name)
    }

    pub fn select(&self, selection: &Selection) -> Result<Vec<&ColumnValues>, FileError> {
        match selection {
            Selection::All => Ok(self.frame.values().collect()),
            Selection::Names(names) => names
                .iter()
                .map(|name| {
                    self.frame
                        .get(name)
                        .ok_or_else(|| FileError::UnknownColumn(name.clone()))
                })
                .collect(),
        }
    }

    pub fn into_columns(self) -> IndexMap<String, ColumnValues> {
        self.frame
    }
}
