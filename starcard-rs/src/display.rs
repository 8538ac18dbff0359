//! Text shown in a stat row.

use crate::merge::{MergedStat, StatSource};

/// Values rendered for one stat row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatDisplay {
    /// Large right-aligned value.
    pub primary: String,
    /// Small line beneath the primary value.
    pub secondary: Secondary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Secondary {
    /// The base display repeated on its own.
    Base(String),
    /// Base display followed by `+bonus` in the bonus colour.
    BaseWithBonus { base: String, bonus: String },
    /// Only `+bonus`.
    Bonus(String),
}

/// Truncate a fractional value to a percentage with one decimal place.
///
/// The multiplication by 100 happens before flooring so that values like
/// 0.3746 become 37.4, never 37.5.
pub fn truncated_percent(value: f64) -> f64 {
    (value * 100.0 * 10.0).floor() / 10.0
}

fn format_percent(value: f64) -> String {
    format!("{:.1}%", truncated_percent(value))
}

impl StatDisplay {
    pub fn for_stat(stat: &MergedStat) -> Self {
        let percent = stat.is_percent();
        match &stat.source {
            StatSource::Base(base) => StatDisplay {
                primary: base.display.clone(),
                secondary: Secondary::Base(base.display.clone()),
            },
            StatSource::Both { base, bonus } => {
                let primary = if percent {
                    format_percent(base.value + bonus.value)
                } else {
                    format!("{}", (base.value + bonus.value).trunc() as i64)
                };
                StatDisplay {
                    primary,
                    secondary: Secondary::BaseWithBonus {
                        base: base.display.clone(),
                        bonus: bonus.display.clone(),
                    },
                }
            }
            StatSource::Bonus(bonus) => {
                let primary = if percent {
                    format_percent(bonus.value)
                } else {
                    bonus.display.clone()
                };
                StatDisplay {
                    primary,
                    secondary: Secondary::Bonus(bonus.display.clone()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge_stats;
    use crate::model::{AssetRef, StatEntry};
    use rstest::rstest;

    fn entry(name: &str, value: f64, display: &str, percent: bool) -> StatEntry {
        StatEntry {
            name: name.to_string(),
            icon_ref: AssetRef::from("icon/property/Icon.png"),
            value,
            display: display.to_string(),
            is_percent: percent,
        }
    }

    #[rstest]
    #[case(0.3746, 37.4)]
    #[case(0.05, 5.0)]
    #[case(0.999, 99.9)]
    #[case(1.5, 150.0)]
    fn test_truncated_percent(#[case] value: f64, #[case] expected: f64) {
        assert!((truncated_percent(value) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_base_only_repeats_display() {
        let merged = merge_stats(&[entry("SPD", 101.0, "101", false)], &[]);
        let display = StatDisplay::for_stat(&merged[0]);
        assert_eq!(display.primary, "101");
        assert_eq!(display.secondary, Secondary::Base("101".into()));
    }

    #[test]
    fn test_both_flat_values_truncate() {
        let merged = merge_stats(
            &[entry("HP", 1047.816, "1047", false)],
            &[entry("HP", 813.9, "813", false)],
        );
        let display = StatDisplay::for_stat(&merged[0]);
        assert_eq!(display.primary, "1861");
        assert_eq!(
            display.secondary,
            Secondary::BaseWithBonus {
                base: "1047".into(),
                bonus: "813".into()
            }
        );
    }

    #[test]
    fn test_both_percent_values_sum_then_truncate() {
        let merged = merge_stats(
            &[entry("CRIT Rate", 0.05, "5.0%", true)],
            &[entry("CRIT Rate", 0.3246, "32.4%", true)],
        );
        let display = StatDisplay::for_stat(&merged[0]);
        assert_eq!(display.primary, "37.4%");
    }

    #[test]
    fn test_bonus_only() {
        let merged = merge_stats(
            &[],
            &[
                entry("Quantum DMG Boost", 0.3888, "38.8%", true),
                entry("Break Effect", 64.8, "64.8", false),
            ],
        );
        let percent = StatDisplay::for_stat(&merged[0]);
        assert_eq!(merged[0].name, "Quantum DMG");
        assert_eq!(percent.primary, "38.8%");
        assert_eq!(percent.secondary, Secondary::Bonus("38.8%".into()));

        let flat = StatDisplay::for_stat(&merged[1]);
        assert_eq!(flat.primary, "64.8");
    }

    #[test]
    fn test_whole_percent_keeps_one_decimal() {
        let merged = merge_stats(&[], &[entry("Effect RES", 0.1, "10.0%", true)]);
        assert_eq!(StatDisplay::for_stat(&merged[0]).primary, "10.0%");
    }
}
