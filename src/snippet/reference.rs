//! Cheat-sheet of framework patterns the player can search and insert.

/// A named list of patterns, e.g. "Directives".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternGroup {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternCategory {
    pub name: &'static str,
    pub groups: &'static [PatternGroup],
}

/// A category with only the groups and patterns that matched a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryHits {
    pub name: &'static str,
    pub groups: Vec<(&'static str, Vec<&'static str>)>,
}

impl CategoryHits {
    pub fn patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.iter().flat_map(|(_, patterns)| patterns.iter().copied())
    }
}

/// Filter `catalog` by `term`, case-insensitively.
///
/// A pattern is kept when the pattern itself, its group name or its category
/// name contains the term. Groups and categories left empty are dropped. An
/// empty term keeps everything.
pub fn search(catalog: &[PatternCategory], term: &str) -> Vec<CategoryHits> {
    let needle = term.to_lowercase();

    catalog
        .iter()
        .filter_map(|category| {
            let category_hit = category.name.to_lowercase().contains(&needle);
            let groups: Vec<_> = category
                .groups
                .iter()
                .filter_map(|group| {
                    let group_hit = category_hit || group.name.to_lowercase().contains(&needle);
                    let patterns: Vec<_> = group
                        .patterns
                        .iter()
                        .copied()
                        .filter(|p| group_hit || p.to_lowercase().contains(&needle))
                        .collect();
                    (!patterns.is_empty()).then_some((group.name, patterns))
                })
                .collect();

            (!groups.is_empty()).then_some(CategoryHits {
                name: category.name,
                groups,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[PatternCategory] = &[
        PatternCategory {
            name: "Template Syntax",
            groups: &[
                PatternGroup {
                    name: "Directives",
                    patterns: &["v-if=\"condition\"", "v-for=\"item in items\""],
                },
                PatternGroup {
                    name: "Event Handling",
                    patterns: &["@click=\"method\""],
                },
            ],
        },
        PatternCategory {
            name: "Router",
            groups: &[PatternGroup {
                name: "Navigation",
                patterns: &["router.push({ name: \"Home\" })"],
            }],
        },
    ];

    #[test]
    fn test_empty_term_keeps_everything() {
        let hits = search(CATALOG, "");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].patterns().count(), 3);
    }

    #[test]
    fn test_pattern_match_is_case_insensitive() {
        let hits = search(CATALOG, "V-FOR");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].groups, vec![("Directives", vec!["v-for=\"item in items\""])]);
    }

    #[test]
    fn test_group_name_match_keeps_whole_group() {
        let hits = search(CATALOG, "event");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].groups, vec![("Event Handling", vec!["@click=\"method\""])]);
    }

    #[test]
    fn test_category_name_match_keeps_whole_category() {
        let hits = search(CATALOG, "router");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Router");
        // "router.push" matches too, but only once
        assert_eq!(hits[0].patterns().count(), 1);
    }

    #[test]
    fn test_no_match() {
        assert!(search(CATALOG, "zzz").is_empty());
    }
}
