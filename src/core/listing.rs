//! File listing pipeline: filter, sort, paginate.
//!
//! Everything here is pure. The full file set is borrowed, never mutated,
//! and the same inputs always produce the same page.

use std::cmp::Ordering;

use super::collate::locale_cmp;
use crate::models::{FileRecord, FilterSpec, SortKey, SortOrder};

/// One page of the filtered, sorted listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisiblePage {
    /// Rows on the requested page, in display order.
    pub rows: Vec<FileRecord>,
    /// Number of files that passed the filter across all pages.
    pub total_matching: usize,
}

/// Produce page `page` (1-based) of `page_size` rows.
///
/// A page past the end, page 0, or a zero page size yields no rows.
pub fn visible_page(
    all: &[FileRecord],
    filter: &FilterSpec,
    page: usize,
    page_size: usize,
) -> VisiblePage {
    let matching = filter_sorted(all, filter);
    let total_matching = matching.len();

    let rows = match page_window(page, page_size, total_matching) {
        Some((start, end)) => matching[start..end].iter().map(|f| (*f).clone()).collect(),
        None => Vec::new(),
    };

    VisiblePage {
        rows,
        total_matching,
    }
}

/// Filter then stable-sort, borrowing from `all`.
pub fn filter_sorted<'a>(all: &'a [FileRecord], filter: &FilterSpec) -> Vec<&'a FileRecord> {
    let needle = filter.search.to_lowercase();
    let mut matching: Vec<&FileRecord> = all
        .iter()
        .filter(|file| matches_filter(file, &needle, &filter.category))
        .collect();

    if let Some(key) = filter.sort_by {
        matching.sort_by(|a, b| compare(a, b, key, filter.sort_order));
    }
    matching
}

/// Whether `file` passes the search and category filter.
///
/// `needle` must already be lower-cased.
fn matches_filter(file: &FileRecord, needle: &str, category: &str) -> bool {
    let matches_search = needle.is_empty() || file.name.to_lowercase().contains(needle);
    let matches_category = category.is_empty() || file.category.as_str() == category;
    matches_search && matches_category
}

/// Comparator for one sort key and direction.
pub fn compare(a: &FileRecord, b: &FileRecord, key: SortKey, order: SortOrder) -> Ordering {
    let ordering = match key {
        SortKey::Name => locale_cmp(&a.name, &b.name),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::LastModified => a.last_modified.cmp(&b.last_modified),
    };
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Half-open index window `[start, end)` of `page` within `total` items.
fn page_window(page: usize, page_size: usize, total: usize) -> Option<(usize, usize)> {
    if page == 0 || page_size == 0 {
        return None;
    }
    let start = (page - 1).checked_mul(page_size)?;
    if start >= total {
        return None;
    }
    let end = start.saturating_add(page_size).min(total);
    Some((start, end))
}

/// Number of pages needed for `total` items. Always at least 1 so the pager
/// has something to show for an empty result.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Pull `page` back into `1..=page_count` after the result shrank.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::directory::FixtureDirectory;
    use crate::models::Category;

    fn fixture_files() -> Vec<FileRecord> {
        FixtureDirectory::seeded().snapshot()
    }

    fn names(rows: &[FileRecord]) -> Vec<&str> {
        rows.iter().map(|f| f.name.as_str()).collect()
    }

    fn filter(search: &str, category: &str) -> FilterSpec {
        FilterSpec {
            search: search.to_string(),
            category: category.to_string(),
            ..FilterSpec::default()
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    #[test]
    fn test_filter_predicate_holds_for_every_file() {
        let files = fixture_files();
        for (search, category) in [("", ""), ("REPORT", ""), ("o", "Ordering"), ("", "Personnel")] {
            let spec = filter(search, category);
            let page = visible_page(&files, &spec, 1, files.len());
            for file in &files {
                let expected = (search.is_empty()
                    || file.name.to_lowercase().contains(&search.to_lowercase()))
                    && (category.is_empty() || file.category.as_str() == category);
                assert_eq!(page.rows.contains(file), expected, "{}", file.name);
            }
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let files = fixture_files();
        let page = visible_page(&files, &filter("invoice", ""), 1, 10);
        assert_eq!(names(&page.rows), vec!["Invoice Q1 2024.pdf"]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let files = fixture_files();
        let page = visible_page(&files, &filter("", "personnel"), 1, 10);
        assert_eq!(page.total_matching, 0);
    }

    #[test]
    fn test_personnel_filter() {
        let files = fixture_files();
        let page = visible_page(&files, &filter("", "Personnel"), 1, 10);
        assert_eq!(
            names(&page.rows),
            vec!["Annual_Report.pdf", "Employee_Records.xlsx"]
        );
        assert!(page.rows.iter().all(|f| f.category == Category::Personnel));
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    #[test]
    fn test_desc_is_reverse_of_asc() {
        let files = fixture_files();
        for key in SortKey::ALL {
            let asc = FilterSpec {
                sort_by: Some(key),
                sort_order: SortOrder::Asc,
                ..FilterSpec::default()
            };
            let desc = FilterSpec {
                sort_order: SortOrder::Desc,
                ..asc.clone()
            };
            let mut up = visible_page(&files, &asc, 1, 100).rows;
            up.reverse();
            assert_eq!(up, visible_page(&files, &desc, 1, 100).rows, "{key:?}");
        }
    }

    #[test]
    fn test_sort_by_size() {
        let files = fixture_files();
        let spec = FilterSpec {
            sort_by: Some(SortKey::Size),
            ..FilterSpec::default()
        };
        let rows = visible_page(&files, &spec, 1, 100).rows;
        assert!(rows.windows(2).all(|w| w[0].size <= w[1].size));
    }

    #[test]
    fn test_sort_by_last_modified_desc() {
        let files = fixture_files();
        let spec = FilterSpec {
            sort_by: Some(SortKey::LastModified),
            sort_order: SortOrder::Desc,
            ..FilterSpec::default()
        };
        let rows = visible_page(&files, &spec, 1, 100).rows;
        assert!(rows.windows(2).all(|w| w[0].last_modified >= w[1].last_modified));
    }

    #[test]
    fn test_unrecognized_sort_keeps_order() {
        let files = fixture_files();
        let spec = FilterSpec {
            sort_by: SortKey::parse("owner"),
            sort_order: SortOrder::Desc,
            ..FilterSpec::default()
        };
        assert_eq!(visible_page(&files, &spec, 1, 100).rows, files);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut files = fixture_files();
        for file in &mut files {
            file.size = 42;
        }
        let spec = FilterSpec {
            sort_by: Some(SortKey::Size),
            ..FilterSpec::default()
        };
        assert_eq!(visible_page(&files, &spec, 1, 100).rows, files);
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    #[test]
    fn test_seven_files_one_page() {
        let files = fixture_files();
        assert_eq!(files.len(), 7);

        let first = visible_page(&files, &FilterSpec::default(), 1, 7);
        assert_eq!(first.rows.len(), 7);
        assert_eq!(first.total_matching, 7);

        let second = visible_page(&files, &FilterSpec::default(), 2, 7);
        assert!(second.rows.is_empty());
        assert_eq!(second.total_matching, 7);
    }

    #[test]
    fn test_pages_partition_the_result() {
        let files = fixture_files();
        let spec = FilterSpec::default();
        let full = visible_page(&files, &spec, 1, files.len()).rows;

        for size in 1..=8 {
            let pages = page_count(full.len(), size);
            let joined: Vec<FileRecord> = (1..=pages)
                .flat_map(|p| visible_page(&files, &spec, p, size).rows)
                .collect();
            assert_eq!(joined, full, "page size {size}");
        }
    }

    #[test]
    fn test_degenerate_pages() {
        let files = fixture_files();
        let spec = FilterSpec::default();
        assert!(visible_page(&files, &spec, 0, 5).rows.is_empty());
        assert!(visible_page(&files, &spec, 1, 0).rows.is_empty());
        assert!(visible_page(&files, &spec, usize::MAX, 5).rows.is_empty());
        assert!(visible_page(&[], &spec, 1, 5).rows.is_empty());
    }

    #[test]
    fn test_idempotent_and_non_mutating() {
        let files = fixture_files();
        let before = files.clone();
        let spec = FilterSpec {
            search: "e".to_string(),
            sort_by: Some(SortKey::Size),
            sort_order: SortOrder::Desc,
            ..FilterSpec::default()
        };
        let a = visible_page(&files, &spec, 1, 3);
        let b = visible_page(&files, &spec, 1, 3);
        assert_eq!(a, b);
        assert_eq!(files, before);
    }

    #[test]
    fn test_page_count_and_clamp() {
        assert_eq!(page_count(0, 7), 1);
        assert_eq!(page_count(7, 7), 1);
        assert_eq!(page_count(8, 7), 2);
        assert_eq!(page_count(5, 0), 1);
        assert_eq!(clamp_page(3, 8, 7), 2);
        assert_eq!(clamp_page(0, 8, 7), 1);
        assert_eq!(clamp_page(2, 8, 7), 2);
    }
}
