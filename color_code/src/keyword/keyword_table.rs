// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process wide, read only lookup of CSS color keywords.
//!
//! The [`KeywordTable`] is built once from [`KEYWORD_COLORS`], the first time any of the
//! functions below are called, and never changes after that. There is no API to mutate
//! it, so it is safe to share between threads without locking.
//! - [`lookup_keyword`]: name -> [`Color`], case insensitive.
//! - [`lookup_color_keyword`]: [`Color`] -> canonical name.
//! - [`all_keywords`]: snapshot of every canonical name -> [`Color`].
//! - [`keyword_table`]: the table itself, for ordered iteration.

use crate::{Color, KEYWORD_COLORS};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// One entry of the [`KeywordTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeywordColor {
    /// Canonical capitalized name, eg: `MidnightBlue`.
    pub name: &'static str,
    pub color: Color,
}

/// Use [`keyword_table`] to get the singleton.
#[derive(Debug)]
pub struct KeywordTable {
    entries: Vec<KeywordColor>,
    index_by_lowercase_name: FxHashMap<String, usize>,
    index_by_rgb8: FxHashMap<[u8; 3], usize>,
}

static KEYWORD_TABLE: LazyLock<KeywordTable> = LazyLock::new(KeywordTable::build);

/// The process wide keyword table.
#[must_use]
pub fn keyword_table() -> &'static KeywordTable { &KEYWORD_TABLE }

/// Case insensitive lookup, surrounding whitespace is ignored.
#[must_use]
pub fn lookup_keyword(name: &str) -> Option<Color> {
    keyword_table().lookup(name).map(|it| it.color)
}

/// Canonical keyword name for the RGB triple of `color` (alpha is ignored).
#[must_use]
pub fn lookup_color_keyword(color: Color) -> Option<&'static str> {
    keyword_table().lookup_color(color).map(|it| it.name)
}

/// Snapshot of canonical name -> [`Color`] for every keyword.
#[must_use]
pub fn all_keywords() -> FxHashMap<&'static str, Color> {
    keyword_table()
        .iter()
        .map(|it| (it.name, it.color))
        .collect()
}

impl KeywordTable {
    fn build() -> Self {
        let entries = KEYWORD_COLORS
            .iter()
            .map(|&(name, [red, green, blue])| KeywordColor {
                name,
                color: Color::from_rgb8(red, green, blue),
            })
            .collect::<Vec<_>>();

        let mut index_by_lowercase_name = FxHashMap::default();
        let mut index_by_rgb8 = FxHashMap::default();
        for (index, (name, rgb8)) in KEYWORD_COLORS.iter().enumerate() {
            index_by_lowercase_name.insert(name.to_ascii_lowercase(), index);
            // First (alphabetical) spelling wins, eg: Aqua over Cyan.
            index_by_rgb8.entry(*rgb8).or_insert(index);
        }

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🏷️ Build keyword table",
            keywords = %entries.len(),
            distinct_colors = %index_by_rgb8.len()
        );

        Self {
            entries,
            index_by_lowercase_name,
            index_by_rgb8,
        }
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&KeywordColor> {
        let key = name.trim().to_ascii_lowercase();
        self.index_by_lowercase_name
            .get(&key)
            .map(|&index| &self.entries[index])
    }

    #[must_use]
    pub fn lookup_color(&self, color: Color) -> Option<&KeywordColor> {
        self.index_by_rgb8
            .get(&color.rgb8())
            .map(|&index| &self.entries[index])
    }

    /// Entries in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &KeywordColor> { self.entries.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<'a> IntoIterator for &'a KeywordTable {
    type Item = &'a KeywordColor;
    type IntoIter = std::slice::Iter<'a, KeywordColor>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KEYWORD_COUNT, assert_eq2};
    use std::collections::HashSet;
    use test_case::test_case;

    #[test_case("MidnightBlue", [25, 25, 112])]
    #[test_case("midnightblue", [25, 25, 112] ; "lower case name")]
    #[test_case("MIDNIGHTBLUE", [25, 25, 112] ; "upper case name")]
    #[test_case("  Orange\t", [255, 165, 0])]
    #[test_case("white", [255, 255, 255])]
    #[test_case("RebeccaPurple", [102, 51, 153])]
    fn test_lookup_keyword(name: &str, rgb8: [u8; 3]) {
        let color = lookup_keyword(name).unwrap();
        assert_eq2!(color.rgb8(), rgb8);
        assert_eq2!(color.alpha(), 1.0);
    }

    #[test_case("foobar")]
    #[test_case("")]
    #[test_case("Midnight Blue")]
    #[test_case("transparent")]
    fn test_lookup_keyword_miss(name: &str) {
        assert_eq2!(lookup_keyword(name), None);
    }

    #[test]
    fn test_lookup_color_keyword() {
        assert_eq2!(lookup_color_keyword(Color::WHITE), Some("White"));
        assert_eq2!(lookup_color_keyword(Color::BLACK), Some("Black"));
        assert_eq2!(
            lookup_color_keyword(Color::from_rgb8(25, 25, 112)),
            Some("MidnightBlue")
        );
        assert_eq2!(lookup_color_keyword(Color::from_rgb8(25, 25, 113)), None);
    }

    #[test]
    fn test_lookup_color_keyword_ignores_alpha() {
        let translucent = Color::from_rgb8(255, 165, 0).with_alpha(0.2).unwrap();
        assert_eq2!(lookup_color_keyword(translucent), Some("Orange"));
    }

    #[test_case([0, 255, 255], "Aqua")]
    #[test_case([255, 0, 255], "Fuchsia")]
    #[test_case([128, 128, 128], "Gray")]
    #[test_case([169, 169, 169], "DarkGray")]
    #[test_case([47, 79, 79], "DarkSlateGray")]
    fn test_shared_color_picks_first_name(rgb8: [u8; 3], name: &str) {
        assert_eq2!(lookup_color_keyword(Color::from(rgb8)), Some(name));
    }

    #[test]
    fn test_table_shape() {
        let table = keyword_table();
        assert_eq2!(table.len(), KEYWORD_COUNT);
        assert!(!table.is_empty());

        let lowercase_names = table
            .iter()
            .map(|it| it.name.to_ascii_lowercase())
            .collect::<HashSet<_>>();
        assert_eq2!(lowercase_names.len(), KEYWORD_COUNT);

        let names = table.into_iter().map(|it| it.name).collect::<Vec<_>>();
        let mut sorted = names.clone();
        sorted.sort_by_key(|it| it.to_ascii_lowercase());
        assert_eq2!(names, sorted);
    }

    #[test]
    fn test_every_keyword_round_trips() {
        for entry in keyword_table() {
            let found = lookup_color_keyword(entry.color).unwrap();
            assert_eq2!(lookup_keyword(found).unwrap().rgb8(), entry.color.rgb8());
        }
    }

    #[test]
    fn test_all_keywords_snapshot() {
        let snapshot = all_keywords();
        assert_eq2!(snapshot.len(), KEYWORD_COUNT);
        assert_eq2!(snapshot["MidnightBlue"], Color::from_rgb8(25, 25, 112));
        assert!(!snapshot.contains_key("midnightblue"));
    }

    #[test]
    fn test_concurrent_reads() {
        std::thread::scope(|scope| {
            let handles = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        keyword_table()
                            .iter()
                            .filter(|it| lookup_keyword(it.name).is_some())
                            .count()
                    })
                })
                .collect::<Vec<_>>();
            for handle in handles {
                assert_eq2!(handle.join().unwrap(), KEYWORD_COUNT);
            }
        });
    }
}
