//! QA tests for the content search filter over the built-in catalog.

use kaltim_core::catalog::Catalog;

#[test]
fn empty_query_restores_full_catalog() {
    let catalog = Catalog::builtin();
    let hits = catalog.search("");

    assert!(hits.is_unfiltered());
    assert_eq!(hits.match_count(), 0);
    assert_eq!(
        hits.visible_regions(catalog).len(),
        catalog.regions.len(),
        "empty search must show the unfiltered catalog"
    );
}

#[test]
fn mahakam_returns_the_two_river_regions() {
    let catalog = Catalog::builtin();
    let hits = catalog.search("Mahakam");

    let names: Vec<&str> = hits.regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names.len(), 2, "expected exactly two region matches, got {names:?}");
    assert!(names.contains(&"Samarinda"));
    assert!(names.contains(&"Kutai Kartanegara"));

    // The displayed count is region matches plus culture matches.
    assert_eq!(hits.match_count(), hits.regions.len() + hits.culture.len());

    // Culture hits carry their owning region.
    for hit in &hits.culture {
        assert!(catalog.region(hit.region.id).is_some());
    }
}

#[test]
fn search_is_case_insensitive() {
    let catalog = Catalog::builtin();
    let upper = catalog.search("MAHAKAM");
    let mixed = catalog.search("mAhAkAm");

    assert_eq!(upper.match_count(), mixed.match_count());
    assert_eq!(upper.regions.len(), 2);
}

#[test]
fn culture_only_match_falls_back_to_full_region_list() {
    let catalog = Catalog::builtin();
    // "Amplang" names a Samarinda culture item and appears in no region
    // name or description.
    let hits = catalog.search("Amplang");

    assert!(hits.regions.is_empty(), "no region should match 'Amplang'");
    assert!(!hits.culture.is_empty());
    assert_eq!(hits.culture[0].region.name, "Samarinda");

    // The quirk: with culture matches only, the region list shows the
    // whole catalog while the count reports just the culture hits.
    assert_eq!(hits.visible_regions(catalog).len(), catalog.regions.len());
    assert_eq!(hits.match_count(), hits.culture.len());
}

#[test]
fn hopeless_query_yields_empty_results() {
    let catalog = Catalog::builtin();
    let hits = catalog.search("xyzzy tidak ada");

    assert_eq!(hits.match_count(), 0);
    assert!(!hits.is_unfiltered());
    assert!(hits.visible_regions(catalog).is_empty());
}

#[test]
fn query_is_trimmed_before_matching() {
    let catalog = Catalog::builtin();
    let hits = catalog.search("  Mahakam  ");
    assert_eq!(hits.regions.len(), 2);
    assert_eq!(hits.query(), "Mahakam");
}
