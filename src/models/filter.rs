//! Listing filter criteria.

use serde::{Deserialize, Serialize};

/// Column the listing is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Size,
    LastModified,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Size, SortKey::LastModified];

    /// Parse a wire/select value. Unrecognized keys yield `None`, which the
    /// listing treats as "keep the current order".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "size" => Some(Self::Size),
            "lastModified" => Some(Self::LastModified),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::LastModified => "lastModified",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::LastModified => "Last modified",
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Search, category and ordering applied to the file listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Case-insensitive substring matched against file names. Empty matches all.
    pub search: String,
    /// Exact category label. Empty matches all.
    pub category: String,
    /// `None` keeps the filtered order untouched.
    pub sort_by: Option<SortKey>,
    pub sort_order: SortOrder,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            sort_by: Some(SortKey::Name),
            sort_order: SortOrder::Asc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = FilterSpec::default();
        assert!(filter.search.is_empty());
        assert!(filter.category.is_empty());
        assert_eq!(filter.sort_by, Some(SortKey::Name));
        assert_eq!(filter.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_sort_key_parse() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("category"), None);
        assert_eq!(SortKey::parse(""), None);
    }

    #[test]
    fn test_order_flip() {
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flipped().flipped(), SortOrder::Desc);
    }
}
