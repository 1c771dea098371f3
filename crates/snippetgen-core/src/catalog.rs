//! The snippet catalog and its builder.
//!
//! A catalog holds one [`SnippetRecord`] for every [`SnippetKind`] with an
//! argument count in `0..=max`, keyed by [`SnippetKind::name`]. Entries are
//! kept in key order so serialization is reproducible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnippetError};
use crate::locale::Locale;
use crate::snippet::{SnippetKind, SnippetRecord, Target};
use crate::templates::renderer::Describer;

/// A validated, non-negative maximum argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxArgs(u32);

impl MaxArgs {
    pub fn new(max: u32) -> Self {
        Self(max)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Every kind covered by this bound, grouped by argument count.
    pub fn kinds(self) -> impl Iterator<Item = SnippetKind> {
        (0..=self.0).flat_map(|args| {
            Target::ALL.into_iter().flat_map(move |target| {
                [false, true]
                    .into_iter()
                    .map(move |returns| SnippetKind::new(args, target, returns))
            })
        })
    }
}

impl TryFrom<i64> for MaxArgs {
    type Error = SnippetError;

    fn try_from(value: i64) -> Result<Self> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| SnippetError::InvalidMaxArgs(value))
    }
}

/// Generated snippets keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetCatalog {
    entries: BTreeMap<String, SnippetRecord>,
}

impl SnippetCatalog {
    /// Build the full catalog for `max`, describing entries with `describer`.
    pub fn build(max: MaxArgs, describer: &Describer) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for kind in max.kinds() {
            let record = SnippetRecord::new(&kind, describer.describe(&kind)?);
            entries.insert(kind.name(), record);
        }
        tracing::debug!(max_args = max.get(), entries = entries.len(), "built snippet catalog");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&SnippetRecord> {
        self.entries.get(name)
    }

    /// Look up an entry by its trigger.
    pub fn find_trigger(&self, trigger: &str) -> Option<(&str, &SnippetRecord)> {
        self.iter().find(|(_, record)| record.trigger == trigger)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SnippetRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Compare an existing catalog (`self`) against the `expected` one.
    pub fn diff(&self, expected: &SnippetCatalog) -> CatalogDiff {
        let mut diff = CatalogDiff::default();
        for (name, record) in expected.iter() {
            match self.get(name) {
                None => diff.missing.push(name.to_string()),
                Some(existing) if existing != record => diff.stale.push(name.to_string()),
                Some(_) => {}
            }
        }
        diff.unexpected = self
            .iter()
            .filter(|(name, _)| expected.get(name).is_none())
            .map(|(name, _)| name.to_string())
            .collect();
        diff
    }
}

/// Differences between an existing catalog and a fresh build, by entry name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDiff {
    /// Expected entries that are absent.
    pub missing: Vec<String>,
    /// Entries present in both whose record differs.
    pub stale: Vec<String>,
    /// Entries the fresh build would not produce.
    pub unexpected: Vec<String>,
}

impl CatalogDiff {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.stale.is_empty() && self.unexpected.is_empty()
    }
}

/// Build the catalog for `max_args` with Japanese descriptions.
///
/// Fails with [`SnippetError::InvalidMaxArgs`] for negative input before any
/// entry is generated.
pub fn build_catalog(max_args: i64) -> Result<SnippetCatalog> {
    let max = MaxArgs::try_from(max_args)?;
    let describer = Describer::new(Locale::default())?;
    SnippetCatalog::build(max, &describer)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_entry_count() {
        for n in 0..8 {
            let catalog = build_catalog(n).unwrap();
            assert_eq!(catalog.len(), 4 * (n as usize + 1));
        }
    }

    #[test]
    fn test_negative_max_args_rejected() {
        assert!(matches!(
            build_catalog(-1),
            Err(SnippetError::InvalidMaxArgs(-1))
        ));
        assert!(MaxArgs::try_from(i64::MIN).is_err());
        assert!(MaxArgs::try_from(i64::from(u32::MAX) + 1).is_err());
        assert_eq!(MaxArgs::try_from(0).unwrap().get(), 0);
    }

    #[test]
    fn test_names_and_kinds_are_bijective() {
        let kinds: Vec<SnippetKind> = MaxArgs::new(12).kinds().collect();
        let names: HashSet<String> = kinds.iter().map(SnippetKind::name).collect();
        let triggers: HashSet<String> = kinds.iter().map(SnippetKind::trigger).collect();
        let unique_kinds: HashSet<SnippetKind> = kinds.iter().copied().collect();
        assert_eq!(unique_kinds.len(), kinds.len());
        assert_eq!(names.len(), kinds.len());
        assert_eq!(triggers.len(), kinds.len());
    }

    #[test]
    fn test_zero_max_has_four_entries() {
        let catalog = build_catalog(0).unwrap();
        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "Args 0 Function",
                "Args 0 Method",
                "Args 0 Returns Function",
                "Args 0 Returns Method",
            ]
        );
    }

    #[test]
    fn test_record_contents() {
        let catalog = build_catalog(3).unwrap();
        let record = catalog.get("Args 2 Returns Method").unwrap();
        assert_eq!(record.trigger, "ma2r");
        assert_eq!(record.description, "引数が2個で戻り値がある時のメソッド");
        assert_eq!(record.body, SnippetKind::new(2, Target::Method, true).body());
    }

    #[test]
    fn test_find_trigger() {
        let catalog = build_catalog(1).unwrap();
        let (name, record) = catalog.find_trigger("fa1").unwrap();
        assert_eq!(name, "Args 1 Function");
        assert_eq!(record.body.len(), 6);
        assert!(catalog.find_trigger("fa2").is_none());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(build_catalog(5).unwrap(), build_catalog(5).unwrap());
    }

    #[test]
    fn test_monotonic() {
        let small = build_catalog(3).unwrap();
        let large = build_catalog(4).unwrap();
        assert!(large.len() > small.len());
        for (name, record) in small.iter() {
            assert_eq!(large.get(name), Some(record), "{name}");
        }
    }

    #[test]
    fn test_diff_identical_is_clean() {
        let catalog = build_catalog(2).unwrap();
        assert!(catalog.diff(&build_catalog(2).unwrap()).is_clean());
    }

    #[test]
    fn test_diff_reports_missing_and_unexpected() {
        let old = build_catalog(1).unwrap();
        let diff = old.diff(&build_catalog(2).unwrap());
        assert_eq!(diff.missing.len(), 4);
        assert!(diff.missing.contains(&"Args 2 Returns Method".to_string()));
        assert!(diff.stale.is_empty());
        assert!(diff.unexpected.is_empty());

        let reverse = build_catalog(2).unwrap().diff(&old);
        assert_eq!(reverse.unexpected.len(), 4);
        assert!(!reverse.is_clean());
    }

    #[test]
    fn test_diff_reports_stale() {
        let ja = build_catalog(1).unwrap();
        let en = SnippetCatalog::build(MaxArgs::new(1), &Describer::new(Locale::En).unwrap()).unwrap();
        let diff = ja.diff(&en);
        assert_eq!(diff.stale.len(), 8);
        assert!(diff.missing.is_empty());
    }

    #[test]
    fn test_locale_only_changes_descriptions() {
        let ja = SnippetCatalog::build(MaxArgs::new(2), &Describer::new(Locale::Ja).unwrap()).unwrap();
        let en = SnippetCatalog::build(MaxArgs::new(2), &Describer::new(Locale::En).unwrap()).unwrap();
        for ((ja_name, ja_record), (en_name, en_record)) in ja.iter().zip(en.iter()) {
            assert_eq!(ja_name, en_name);
            assert_eq!(ja_record.body, en_record.body);
            assert_eq!(ja_record.trigger, en_record.trigger);
            assert_ne!(ja_record.description, en_record.description);
        }
    }
}
