use crate::audio::DeviceSource;
use crate::error::Result;
use crate::search::{Query, SearchOutcome};
use crate::util::contains_ignore_case;
use serde::Serialize;
use std::fmt;

/// 接続中のマイク 1 台分 (名前と列挙順の番号)
///
/// `index` は作成時点の列挙順であり、ハードウェアの固定 ID ではない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Microphone {
    pub name: String,
    pub index: usize,
}

impl fmt::Display for Microphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Index: {}", self.name, self.index)
    }
}

/// 作成時に一度だけ取得したマイク一覧
#[derive(Debug, Clone)]
pub struct MicRegistry {
    microphones: Vec<Microphone>,
}

impl MicRegistry {
    /// デバイスを列挙してスナップショットを作る
    pub fn new<S: DeviceSource + ?Sized>(source: &S) -> Result<Self> {
        let names = source.input_device_names()?;
        let registry = Self::from_names(names);
        tracing::debug!(count = registry.len(), "microphone snapshot taken");
        Ok(registry)
    }

    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let microphones = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Microphone {
                name: name.into(),
                index,
            })
            .collect();
        Self { microphones }
    }

    pub fn microphones(&self) -> &[Microphone] {
        &self.microphones
    }

    pub fn len(&self) -> usize {
        self.microphones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.microphones.is_empty()
    }

    pub fn find_by_index(&self, index: usize) -> Option<&Microphone> {
        self.microphones.iter().find(|mic| mic.index == index)
    }

    /// 名前の一部で検索する (大文字小文字を区別しない、一覧の順序を保つ)
    pub fn find_by_name(&self, name: &str) -> Vec<&Microphone> {
        self.microphones
            .iter()
            .filter(|mic| contains_ignore_case(&mic.name, name))
            .collect()
    }

    pub fn search(&self, query: &Query) -> SearchOutcome {
        tracing::debug!(?query, "searching microphones");
        match query {
            Query::ByIndex(index) => match self.find_by_index(*index) {
                Some(mic) => SearchOutcome::Found {
                    microphone: mic.clone(),
                },
                None => SearchOutcome::IndexNotFound { index: *index },
            },
            Query::ByName(name) => {
                let matches = self.find_by_name(name);
                if matches.is_empty() {
                    SearchOutcome::NameNotFound { name: name.clone() }
                } else {
                    SearchOutcome::Matches {
                        microphones: matches.into_iter().cloned().collect(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use std::cell::Cell;

    struct FakeSource {
        names: Vec<&'static str>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(names: Vec<&'static str>) -> Self {
            Self {
                names,
                calls: Cell::new(0),
            }
        }
    }

    impl DeviceSource for FakeSource {
        fn input_device_names(&self) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.names.iter().map(|n| n.to_string()).collect())
        }
    }

    struct FailingSource;

    impl DeviceSource for FailingSource {
        fn input_device_names(&self) -> Result<Vec<String>> {
            Err(cpal::DevicesError::BackendSpecific {
                err: cpal::BackendSpecificError {
                    description: "backend gone".to_string(),
                },
            }
            .into())
        }
    }

    fn sample() -> MicRegistry {
        MicRegistry::from_names(["USB Mic", "Built-in Microphone", "Webcam Mic"])
    }

    fn mic(name: &str, index: usize) -> Microphone {
        Microphone {
            name: name.to_string(),
            index,
        }
    }

    /// 番号は列挙順の位置と一致し、列挙は一度だけ行われる
    #[test]
    fn test_indices_follow_enumeration_order() {
        let source = FakeSource::new(vec!["a", "b", "b", "c"]);
        let registry = MicRegistry::new(&source).unwrap();
        assert_eq!(source.calls.get(), 1);
        for (pos, mic) in registry.microphones().iter().enumerate() {
            assert_eq!(mic.index, pos);
        }
        assert_eq!(registry.len(), 4);
    }

    /// デバイスが無い場合は空の一覧になる
    #[test]
    fn test_empty_source_gives_empty_registry() {
        let registry = MicRegistry::new(&FakeSource::new(vec![])).unwrap();
        assert!(registry.is_empty());
        assert_eq!(
            registry.search(&Query::ByIndex(0)),
            SearchOutcome::IndexNotFound { index: 0 }
        );
    }

    /// 列挙の失敗はそのまま呼び出し元へ返る
    #[test]
    fn test_source_failure_propagates() {
        let err = MicRegistry::new(&FailingSource).unwrap_err();
        match err {
            RegistryError::Enumeration(e) => assert!(e.to_string().contains("backend gone")),
            other => panic!("unexpected error: {other}"),
        }
    }

    /// 番号の完全一致で検索
    #[test]
    fn test_find_by_index_exact_match() {
        let registry = sample();
        assert_eq!(
            registry.find_by_index(1),
            Some(&mic("Built-in Microphone", 1))
        );
        assert_eq!(registry.find_by_index(9), None);
    }

    /// 名前の部分一致は大文字小文字を区別せず、一覧の順序を保つ
    #[test]
    fn test_find_by_name_is_case_insensitive_and_ordered() {
        let registry = sample();
        let all: Vec<usize> = registry
            .find_by_name("mic")
            .iter()
            .map(|m| m.index)
            .collect();
        assert_eq!(all, vec![0, 1, 2]);

        assert_eq!(registry.find_by_name("USB"), vec![&mic("USB Mic", 0)]);
        assert!(registry.find_by_name("xyz").is_empty());
    }

    #[test]
    fn test_search_by_index() {
        let registry = sample();
        assert_eq!(
            registry.search(&Query::ByIndex(2)),
            SearchOutcome::Found {
                microphone: mic("Webcam Mic", 2)
            }
        );
        assert_eq!(
            registry.search(&Query::ByIndex(9)),
            SearchOutcome::IndexNotFound { index: 9 }
        );
    }

    #[test]
    fn test_search_by_name() {
        let registry = sample();
        assert_eq!(
            registry.search(&Query::ByName("webcam".into())),
            SearchOutcome::Matches {
                microphones: vec![mic("Webcam Mic", 2)]
            }
        );
        assert_eq!(
            registry.search(&Query::ByName("xyz".into())),
            SearchOutcome::NameNotFound { name: "xyz".into() }
        );
    }

    /// 両方指定した場合は番号での検索だけが行われる
    #[test]
    fn test_both_selectors_only_run_index_branch() {
        let registry = sample();
        let query = Query::from_selectors(Some("mic".into()), Some(0)).unwrap();
        assert_eq!(
            registry.search(&query),
            SearchOutcome::Found {
                microphone: mic("USB Mic", 0)
            }
        );
    }
}
