//! Free-text search over the region catalog.
//!
//! Case-insensitive substring matching against region names/descriptions and
//! culture item names/descriptions. No ranking, pagination, or fuzzy
//! matching; the fixture arrays are small enough that every query is a
//! linear scan.

use crate::catalog::{AudioClip, Catalog, CultureItem, Region};

/// A culture entry that matched, tagged with its owning region.
#[derive(Debug, Clone, Copy)]
pub struct CultureHit<'a> {
    pub item: &'a CultureItem,
    pub region: &'a Region,
}

/// Result of one search query.
#[derive(Debug, Clone)]
pub struct SearchHits<'a> {
    query: String,
    /// Regions whose name or description matched.
    pub regions: Vec<&'a Region>,
    /// Culture entries whose name or description matched.
    pub culture: Vec<CultureHit<'a>>,
}

impl<'a> SearchHits<'a> {
    /// True when the query was empty: the catalog is shown unfiltered and
    /// no match count is displayed.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The displayed result count: region matches plus culture matches.
    pub fn match_count(&self) -> usize {
        self.regions.len() + self.culture.len()
    }

    /// The region list to render for this search.
    ///
    /// Longstanding quirk carried over from the original screen: when
    /// culture entries matched but no region did, the full region list
    /// stays visible instead of an empty one. The match count still
    /// reports zero region matches in that case.
    pub fn visible_regions(&self, catalog: &'a Catalog) -> Vec<&'a Region> {
        if self.is_unfiltered() {
            return catalog.regions.iter().collect();
        }
        if self.regions.is_empty() && !self.culture.is_empty() {
            return catalog.regions.iter().collect();
        }
        self.regions.clone()
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl Catalog {
    /// Run the content search filter. An empty or whitespace-only query
    /// clears all results and restores the unfiltered catalog.
    pub fn search(&self, query: &str) -> SearchHits<'_> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SearchHits {
                query: String::new(),
                regions: Vec::new(),
                culture: Vec::new(),
            };
        }

        let needle = trimmed.to_lowercase();

        let regions: Vec<&Region> = self
            .regions
            .iter()
            .filter(|r| {
                contains_ignore_case(&r.name, &needle)
                    || contains_ignore_case(&r.description, &needle)
            })
            .collect();

        let mut culture = Vec::new();
        for region in &self.regions {
            for item in &region.culture {
                if contains_ignore_case(&item.name, &needle)
                    || contains_ignore_case(&item.description, &needle)
                {
                    culture.push(CultureHit { item, region });
                }
            }
        }

        SearchHits {
            query: trimmed.to_string(),
            regions,
            culture,
        }
    }

    /// Filter audio clips by title or language, same matching rule as the
    /// region search. An empty query keeps the whole library.
    pub fn filter_clips(&self, query: &str) -> Vec<&AudioClip> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return self.audio_clips.iter().collect();
        }

        let needle = trimmed.to_lowercase();
        self.audio_clips
            .iter()
            .filter(|c| {
                contains_ignore_case(&c.title, &needle)
                    || contains_ignore_case(&c.language, &needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CultureItem, Region};

    fn two_region_catalog() -> Catalog {
        Catalog {
            regions: vec![
                Region::new(1, "Hulu", "hulu.jpg", "Kampung di hulu sungai.", "100", "hulu")
                    .with_culture(vec![CultureItem::new(
                        "Anyaman rotan",
                        "rotan.jpg",
                        "Anyaman dari rotan pilihan.",
                    )]),
                Region::new(2, "Hilir", "hilir.jpg", "Bandar di muara.", "200", "hilir"),
            ],
            quizzes: Vec::new(),
            coded_quizzes: Vec::new(),
            stories: Vec::new(),
            audio_categories: Vec::new(),
            audio_clips: Vec::new(),
        }
    }

    #[test]
    fn empty_query_is_unfiltered() {
        let catalog = two_region_catalog();
        let hits = catalog.search("");
        assert!(hits.is_unfiltered());
        assert_eq!(hits.match_count(), 0);
        assert_eq!(hits.visible_regions(&catalog).len(), 2);
    }

    #[test]
    fn whitespace_query_is_unfiltered() {
        let catalog = two_region_catalog();
        let hits = catalog.search("   ");
        assert!(hits.is_unfiltered());
        assert_eq!(hits.visible_regions(&catalog).len(), 2);
    }

    #[test]
    fn region_match_is_case_insensitive() {
        let catalog = two_region_catalog();
        let hits = catalog.search("hULu");
        assert_eq!(hits.regions.len(), 1);
        assert_eq!(hits.regions[0].name, "Hulu");
    }

    #[test]
    fn culture_only_match_keeps_full_region_list() {
        let catalog = two_region_catalog();
        let hits = catalog.search("rotan");

        assert!(hits.regions.is_empty());
        assert_eq!(hits.culture.len(), 1);
        assert_eq!(hits.culture[0].region.name, "Hulu");
        assert_eq!(hits.match_count(), 1);
        // Quirk: the region list falls back to the full catalog.
        assert_eq!(hits.visible_regions(&catalog).len(), 2);
    }

    #[test]
    fn no_match_shows_empty_region_list() {
        let catalog = two_region_catalog();
        let hits = catalog.search("zzz");
        assert_eq!(hits.match_count(), 0);
        assert!(!hits.is_unfiltered());
        assert!(hits.visible_regions(&catalog).is_empty());
    }

    #[test]
    fn clip_filter_matches_title_and_language() {
        use crate::catalog::{AudioCategory, AudioClip, CategoryId};

        let mut catalog = two_region_catalog();
        catalog.audio_categories = vec![AudioCategory::new(1, "Salam", "🗣️")];
        catalog.audio_clips = vec![
            AudioClip::new(1, "Salam pagi", "Bahasa Kutai", "0:10", CategoryId(1), "a.mp3"),
            AudioClip::new(2, "Menawar", "Bahasa Banjar", "0:20", CategoryId(1), "b.mp3"),
        ];

        assert_eq!(catalog.filter_clips("").len(), 2);
        assert_eq!(catalog.filter_clips("kutai").len(), 1);
        assert_eq!(catalog.filter_clips("SALAM").len(), 1);
        assert!(catalog.filter_clips("jawa").is_empty());
    }
}
