//! 検索条件と検索結果

use crate::error::{RegistryError, Result};
use crate::registry::Microphone;
use serde::Serialize;
use std::fmt;

/// マイクの検索条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    ByIndex(usize),
    ByName(String),
}

impl Query {
    /// 2 つの省略可能な条件から検索条件を作る
    ///
    /// 両方指定された場合は番号を優先し、名前は無視する。
    pub fn from_selectors(by_name: Option<String>, by_index: Option<usize>) -> Result<Self> {
        match (by_index, by_name) {
            (Some(index), ignored) => {
                if let Some(name) = ignored {
                    tracing::warn!(index, %name, "both selectors given, ignoring name");
                }
                Ok(Query::ByIndex(index))
            }
            (None, Some(name)) => Ok(Query::ByName(name)),
            (None, None) => Err(RegistryError::MissingSelector),
        }
    }
}

/// 検索結果。見つからない場合もエラーではなく結果として返す
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found { microphone: Microphone },
    IndexNotFound { index: usize },
    Matches { microphones: Vec<Microphone> },
    NameNotFound { name: String },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. } | SearchOutcome::Matches { .. })
    }
}

/// 複数台の表示形式 (見出しの後に 1 台 1 行)
pub struct MicrophoneList<'a>(pub &'a [Microphone]);

impl fmt::Display for MicrophoneList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Microphones found:")?;
        for mic in self.0 {
            write!(f, "\n{mic}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found { microphone } => write!(f, "Microphone found - {microphone}"),
            SearchOutcome::IndexNotFound { index } => {
                write!(f, "No microphone found with index {index}.")
            }
            SearchOutcome::Matches { microphones } => {
                write!(f, "{}", MicrophoneList(microphones))
            }
            SearchOutcome::NameNotFound { name } => {
                write!(f, "No microphones found with name containing '{name}'.")
            }
        }
    }
}
