//! Finding the closest color in a reference table.

use std::{collections::BTreeMap, fmt};

use crate::{color::Component, difference::Metric, error::MatchError};

/// A reference table mapping color labels to `rrggbb` hex strings. Entries
/// are visited in ascending label order, so ties between equally close
/// entries always go to the smallest label.
pub type ColorTable = BTreeMap<String, String>;

/// How visible a color difference is to a human observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    /// Below 0.2.
    NotVisible,
    /// From 0.2 up to 1.0.
    VerySmall,
    /// From 1.0 up to 3.0.
    Small,
    /// From 3.0 up to 6.0.
    Medium,
    /// 6.0 and above.
    Large,
}

impl Band {
    /// Classify a difference. Each band includes its lower bound, so a
    /// difference of exactly 1.0 is [`Band::Small`].
    pub fn classify(difference: Component) -> Self {
        if difference < 0.2 {
            Band::NotVisible
        } else if difference < 1.0 {
            Band::VerySmall
        } else if difference < 3.0 {
            Band::Small
        } else if difference < 6.0 {
            Band::Medium
        } else {
            Band::Large
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Band::NotVisible => "not visible",
            Band::VerySmall => "very small",
            Band::Small => "small",
            Band::Medium => "medium",
            Band::Large => "large",
        })
    }
}

/// The closest entry found in a table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match<'a> {
    /// The label of the entry.
    pub label: &'a str,
    /// The hex color of the entry, as written in the table.
    pub rgb: &'a str,
    /// The difference between the entry and the input color.
    pub difference: Component,
}

impl Match<'_> {
    /// The visibility band of the difference.
    pub fn band(&self) -> Band {
        Band::classify(self.difference)
    }
}

/// Scan `table` for the entry closest to `input` under `metric`.
///
/// Every entry is visited once. An entry only replaces the current best when
/// it is strictly closer, so of several equally close entries the first one
/// visited wins. Colors that fail to parse are treated as black.
pub fn find_best_match<'a, T, K, V>(
    input: &str,
    table: T,
    metric: Metric,
) -> Result<Match<'a>, MatchError>
where
    T: IntoIterator<Item = (&'a K, &'a V)>,
    K: AsRef<str> + ?Sized + 'a,
    V: AsRef<str> + ?Sized + 'a,
{
    let mut best: Option<Match<'a>> = None;

    for (label, rgb) in table {
        let candidate = Match {
            label: label.as_ref(),
            rgb: rgb.as_ref(),
            difference: metric.difference(rgb.as_ref(), input),
        };

        let closer = best.is_none_or(|current| candidate.difference < current.difference);
        if closer {
            best = Some(candidate);
        }
    }

    best.ok_or(MatchError::EmptyTable)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn color_table(entries: &[(&str, &str)]) -> ColorTable {
        entries
            .iter()
            .map(|&(label, rgb)| (label.to_owned(), rgb.to_owned()))
            .collect()
    }

    #[test]
    fn empty_table_is_an_error() {
        let empty = ColorTable::new();
        for metric in Metric::ALL {
            assert_eq!(
                find_best_match("ff0000", &empty, metric),
                Err(MatchError::EmptyTable)
            );
        }
    }

    #[test]
    fn singleton_table_matches_its_own_color() {
        let table = color_table(&[("186 C", "c8102e")]);
        for metric in Metric::ALL {
            let found = find_best_match("c8102e", &table, metric).unwrap();
            assert_eq!(found.label, "186 C");
            assert_eq!(found.rgb, "c8102e");
            assert_eq!(found.difference, 0.0);
            assert_eq!(found.band(), Band::NotVisible);
        }
    }

    #[test]
    fn finds_the_closest_entry() {
        let table = color_table(&[
            ("black", "000000"),
            ("blue", "0000ff"),
            ("gray", "777777"),
            ("red", "ff0000"),
            ("white", "ffffff"),
        ]);

        for metric in Metric::ALL {
            let found = find_best_match("fe0102", &table, metric).unwrap();
            assert_eq!(found.label, "red");
            assert_eq!(found.rgb, "ff0000");
            assert!(found.difference > 0.0);

            let found = find_best_match("787878", &table, metric).unwrap();
            assert_eq!(found.label, "gray");
            assert_eq!(found.band(), Band::VerySmall);
        }
    }

    #[test]
    fn first_entry_wins_ties() {
        let table = color_table(&[("b", "ff0000"), ("a", "ff0000"), ("c", "ff0000")]);
        let found = find_best_match("ff0000", &table, Metric::Lab).unwrap();
        assert_eq!(found.label, "a");

        let table = color_table(&[("z-dark", "000000"), ("y-dark", "000000")]);
        let found = find_best_match("101010", &table, Metric::Din99).unwrap();
        assert_eq!(found.label, "y-dark");
    }

    #[test]
    fn malformed_entries_are_black() {
        let table = color_table(&[("broken", "not a color"), ("white", "ffffff")]);
        let found = find_best_match("000000", &table, Metric::Lab).unwrap();
        assert_eq!(found.label, "broken");
        assert_eq!(found.difference, 0.0);
    }

    #[test]
    fn accepts_other_maps() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("green", "00ff00");
        map.insert("blue", "0000ff");
        let found = find_best_match("0000fe", &map, Metric::Din99).unwrap();
        assert_eq!(found.label, "blue");
    }

    #[test]
    fn boundary_values_fall_in_the_next_band_up() {
        assert_eq!(Band::classify(0.0), Band::NotVisible);
        assert_eq!(Band::classify(0.19), Band::NotVisible);
        assert_eq!(Band::classify(0.2), Band::VerySmall);
        assert_eq!(Band::classify(0.99), Band::VerySmall);
        assert_eq!(Band::classify(1.0), Band::Small);
        assert_eq!(Band::classify(2.99), Band::Small);
        assert_eq!(Band::classify(3.0), Band::Medium);
        assert_eq!(Band::classify(5.99), Band::Medium);
        assert_eq!(Band::classify(6.0), Band::Large);
        assert_eq!(Band::classify(176.3), Band::Large);
    }

    #[test]
    fn band_display() {
        assert_eq!(Band::NotVisible.to_string(), "not visible");
        assert_eq!(Band::VerySmall.to_string(), "very small");
        assert_eq!(Band::Small.to_string(), "small");
        assert_eq!(Band::Medium.to_string(), "medium");
        assert_eq!(Band::Large.to_string(), "large");
    }
}
