//! Merging base attributes and bonus additions into one row per stat.

use crate::model::{AssetRef, StatEntry};

/// Which sources contributed to a merged stat row.
#[derive(Debug, Clone, PartialEq)]
pub enum StatSource {
    Base(StatEntry),
    Bonus(StatEntry),
    Both { base: StatEntry, bonus: StatEntry },
}

impl StatSource {
    pub fn base(&self) -> Option<&StatEntry> {
        match self {
            StatSource::Base(base) | StatSource::Both { base, .. } => Some(base),
            StatSource::Bonus(_) => None,
        }
    }

    pub fn bonus(&self) -> Option<&StatEntry> {
        match self {
            StatSource::Bonus(bonus) | StatSource::Both { bonus, .. } => Some(bonus),
            StatSource::Base(_) => None,
        }
    }

    /// The entry whose icon and percent flag the row uses; the bonus wins.
    fn latest(&self) -> &StatEntry {
        match self {
            StatSource::Base(entry) | StatSource::Bonus(entry) => entry,
            StatSource::Both { bonus, .. } => bonus,
        }
    }
}

/// One attribute row keyed by its display name.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedStat {
    pub name: String,
    pub source: StatSource,
}

impl MergedStat {
    pub fn icon_ref(&self) -> &AssetRef {
        &self.source.latest().icon_ref
    }

    pub fn is_percent(&self) -> bool {
        self.source.latest().is_percent
    }
}

/// Display key for a raw stat name: the first " Boost" qualifier is dropped.
pub fn stat_key(name: &str) -> String {
    name.replacen(" Boost", "", 1)
}

/// Merge base stats and bonus stats, keeping first-seen name order with base
/// stats enumerated first. A repeated entry of the same kind replaces the
/// earlier one.
pub fn merge_stats(base: &[StatEntry], bonus: &[StatEntry]) -> Vec<MergedStat> {
    let mut merged: Vec<MergedStat> = Vec::with_capacity(base.len() + bonus.len());

    let tagged = base
        .iter()
        .map(|entry| (entry, false))
        .chain(bonus.iter().map(|entry| (entry, true)));

    for (entry, is_bonus) in tagged {
        let name = stat_key(&entry.name);
        let Some(existing) = merged.iter_mut().find(|stat| stat.name == name) else {
            let source = if is_bonus {
                StatSource::Bonus(entry.clone())
            } else {
                StatSource::Base(entry.clone())
            };
            merged.push(MergedStat { name, source });
            continue;
        };

        let previous = std::mem::replace(&mut existing.source, StatSource::Base(entry.clone()));
        existing.source = match (previous, is_bonus) {
            (StatSource::Base(base), true) | (StatSource::Both { base, .. }, true) => {
                StatSource::Both {
                    base,
                    bonus: entry.clone(),
                }
            }
            (StatSource::Bonus(_), true) => StatSource::Bonus(entry.clone()),
            (StatSource::Bonus(bonus), false) | (StatSource::Both { bonus, .. }, false) => {
                StatSource::Both {
                    base: entry.clone(),
                    bonus,
                }
            }
            (StatSource::Base(_), false) => StatSource::Base(entry.clone()),
        };
    }

    merged
}

/// Character count of the longest merged name.
pub fn longest_name(stats: &[MergedStat]) -> usize {
    stats
        .iter()
        .map(|stat| stat.name.chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stat(name: &str, value: f64, percent: bool) -> StatEntry {
        StatEntry {
            name: name.to_string(),
            icon_ref: AssetRef(format!("icon/property/{}.png", name.replace(' ', ""))),
            value,
            display: value.to_string(),
            is_percent: percent,
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_stats(&[], &[]).is_empty());
    }

    #[test]
    fn test_boost_suffix_merges_rows() {
        let base = [stat("HP", 1000.0, false), stat("SPD", 100.0, false)];
        let bonus = [stat("HP Boost", 500.0, false), stat("CRIT Rate", 0.3, true)];
        let merged = merge_stats(&base, &bonus);

        let names: Vec<_> = merged.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["HP", "SPD", "CRIT Rate"]);
        assert!(matches!(merged[0].source, StatSource::Both { .. }));
        assert_eq!(merged[0].source.base().unwrap().value, 1000.0);
        assert_eq!(merged[0].source.bonus().unwrap().value, 500.0);
        assert!(matches!(merged[1].source, StatSource::Base(_)));
        assert!(matches!(merged[2].source, StatSource::Bonus(_)));
        assert!(merged[2].is_percent());
    }

    #[test]
    fn test_bonus_icon_wins_when_both_present() {
        let base = [stat("ATK", 500.0, false)];
        let mut boost = stat("ATK Boost", 0.2, false);
        boost.icon_ref = AssetRef::from("icon/property/IconAttackAddedRatio.png");
        let merged = merge_stats(&base, &[boost]);
        assert_eq!(merged[0].icon_ref().file_name(), "IconAttackAddedRatio.png");
    }

    #[test]
    fn test_duplicate_base_entry_replaces() {
        let base = [stat("DEF", 1.0, false), stat("DEF", 2.0, false)];
        let merged = merge_stats(&base, &[]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].source.base().unwrap().value, 2.0);
    }

    #[rstest]
    #[case(&["A", "B"], &["C", "A Boost", "B"], &["A", "B", "C"])]
    #[case(&[], &["X Boost", "Y", "X"], &["X", "Y"])]
    #[case(&["Q", "P"], &[], &["Q", "P"])]
    fn test_unique_names_in_first_seen_order(
        #[case] base: &[&str],
        #[case] bonus: &[&str],
        #[case] expected: &[&str],
    ) {
        let base: Vec<_> = base.iter().map(|n| stat(n, 1.0, false)).collect();
        let bonus: Vec<_> = bonus.iter().map(|n| stat(n, 1.0, false)).collect();
        let merged = merge_stats(&base, &bonus);
        let names: Vec<_> = merged.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_longest_name_counts_chars() {
        let merged = merge_stats(&[stat("Effect RES", 0.1, true), stat("HP", 1.0, false)], &[]);
        assert_eq!(longest_name(&merged), 10);
        assert_eq!(longest_name(&[]), 0);
    }
}
