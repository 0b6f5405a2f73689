//! MediaFile domain model and paging parameters.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// A media file record.
///
/// `id` is absent until the store assigns one on creation. `segment` and
/// `uuid` are free-form text attributes; `uuid` is carried through as-is and
/// not validated as a UUID.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MediaFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub segment: Option<String>,
    pub uuid: Option<String>,
}

impl MediaFile {
    /// Create an unpersisted record (no id).
    pub fn new(segment: Option<String>, uuid: Option<String>) -> Self {
        MediaFile {
            id: None,
            segment,
            uuid,
        }
    }
}

// Identity is the database id only: two records are equal iff their ids are
// equal, and two unpersisted records (both without an id) compare equal.
// Hash is intentionally not implemented so id-less records cannot end up as
// colliding map keys.
impl PartialEq for MediaFile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MediaFile {}

/// Sortable columns for media file listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Segment,
    Uuid,
}

impl SortField {
    /// Parse a sort field name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(Self::Id),
            "segment" => Some(Self::Segment),
            "uuid" => Some(Self::Uuid),
            _ => None,
        }
    }
}

/// Sort direction for media file listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a sort direction name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Paging and sorting query parameters.
///
/// `sort` uses the `field,direction` form, e.g. `sort=id,desc`. The direction
/// is optional and defaults to ascending.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PageParams {
    /// 1-based page index (default: 1).
    pub page: Option<u64>,
    /// Page size (default: 20, max: 100).
    pub size: Option<u64>,
    /// Sort specification, e.g. `id,desc`.
    pub sort: Option<String>,
}

const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 100;

impl PageParams {
    /// Calculate the offset for database queries.
    ///
    /// Saturates instead of overflowing for absurd page indexes; the
    /// resulting page is simply empty.
    pub fn offset(&self) -> u64 {
        let page = self.page.unwrap_or(1).max(1);
        (page - 1).saturating_mul(self.clamped_size())
    }

    /// Clamp the page size to the maximum allowed value.
    pub fn clamped_size(&self) -> u64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Parse the sort specification, defaulting to `id,asc`.
    pub fn sort(&self) -> AppResult<(SortField, SortDirection)> {
        let Some(spec) = self.sort.as_deref() else {
            return Ok((SortField::Id, SortDirection::Asc));
        };

        let mut parts = spec.splitn(2, ',');
        let field_str = parts.next().unwrap_or("");
        let field = SortField::parse(field_str)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown sort field '{}'", field_str)))?;

        let direction = match parts.next() {
            None => SortDirection::Asc,
            Some(dir_str) => SortDirection::parse(dir_str).ok_or_else(|| {
                AppError::InvalidInput(format!("Unknown sort direction '{}'", dir_str))
            })?,
        };

        Ok((field, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_id_only() {
        let file1 = MediaFile {
            id: Some(1),
            segment: Some("a".to_string()),
            uuid: Some("b".to_string()),
        };
        let file2 = MediaFile {
            id: Some(1),
            segment: Some("x".to_string()),
            uuid: Some("y".to_string()),
        };
        assert_eq!(file1, file2);

        let file3 = MediaFile {
            id: Some(2),
            ..file1.clone()
        };
        assert_ne!(file1, file3);
    }

    #[test]
    fn test_unpersisted_records_compare_equal() {
        // Documented edge case: two records that both lack an id are equal,
        // while an id-less record never equals a persisted one.
        let new1 = MediaFile::new(Some("a".to_string()), None);
        let new2 = MediaFile::new(Some("b".to_string()), None);
        assert_eq!(new1, new2);

        let persisted = MediaFile {
            id: Some(1),
            ..new1.clone()
        };
        assert_ne!(new1, persisted);
    }

    #[test]
    fn test_id_omitted_from_json_when_absent() {
        let file = MediaFile::new(Some("seg".to_string()), Some("u".to_string()));
        let json = serde_json::to_value(&file).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["segment"], "seg");
    }

    #[test]
    fn test_sort_parsing() {
        let params = PageParams {
            sort: Some("id,desc".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.sort().unwrap(),
            (SortField::Id, SortDirection::Desc)
        );

        let params = PageParams {
            sort: Some("segment".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.sort().unwrap(),
            (SortField::Segment, SortDirection::Asc)
        );

        let params = PageParams::default();
        assert_eq!(params.sort().unwrap(), (SortField::Id, SortDirection::Asc));
    }

    #[test]
    fn test_sort_parsing_rejects_unknown_field() {
        let params = PageParams {
            sort: Some("size,asc".to_string()),
            ..Default::default()
        };
        assert!(params.sort().is_err());

        let params = PageParams {
            sort: Some("id,sideways".to_string()),
            ..Default::default()
        };
        assert!(params.sort().is_err());
    }

    #[test]
    fn test_paging_defaults_and_clamping() {
        let params = PageParams::default();
        assert_eq!(params.offset(), 0);
        assert_eq!(params.clamped_size(), 20);

        let params = PageParams {
            page: Some(3),
            size: Some(10),
            sort: None,
        };
        assert_eq!(params.offset(), 20);

        let params = PageParams {
            page: None,
            size: Some(5000),
            sort: None,
        };
        assert_eq!(params.clamped_size(), 100);
    }

    #[test]
    fn test_offset_saturates_on_huge_page_index() {
        let params = PageParams {
            page: Some(u64::MAX),
            size: Some(100),
            sort: None,
        };
        assert_eq!(params.offset(), u64::MAX);
    }
}
