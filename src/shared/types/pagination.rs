use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::domain::pagination::PageWindow;

/// Rows shown per page when the caller does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Page numbers shown per navigation block.
pub const DEFAULT_BLOCK_SIZE: u64 = 4;

/// A list page request as received from a client.
///
/// `current_page` is kept exactly as requested (it may be zero, negative or
/// far past the end); the engine clamps it once the total is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub current_page: i64,
    pub page_size: u64,
    pub block_size: u64,
}

impl PageRequest {
    /// Request `page` with the default page and block sizes.
    pub fn new(page: i64) -> Self {
        Self {
            current_page: page,
            ..Self::default()
        }
    }

    /// Zero falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self
    }

    /// Zero falls back to [`DEFAULT_BLOCK_SIZE`].
    pub fn with_block_size(mut self, block_size: u64) -> Self {
        self.block_size = if block_size == 0 {
            DEFAULT_BLOCK_SIZE
        } else {
            block_size
        };
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

/// What a page link displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    /// A plain page number
    Page(u64),
    /// Jump to the last page of the previous block ("«")
    Previous,
    /// Jump to the first page of the next block ("»")
    Next,
}

impl PageLabel {
    pub const PREVIOUS_GLYPH: &'static str = "«";
    pub const NEXT_GLYPH: &'static str = "»";
}

impl std::fmt::Display for PageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{}", n),
            Self::Previous => f.write_str(Self::PREVIOUS_GLYPH),
            Self::Next => f.write_str(Self::NEXT_GLYPH),
        }
    }
}

// Numbered labels go out as JSON numbers, jump labels as their glyph.
impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n),
            Self::Previous => serializer.serialize_str(Self::PREVIOUS_GLYPH),
            Self::Next => serializer.serialize_str(Self::NEXT_GLYPH),
        }
    }
}

/// One clickable entry of the page navigation.
///
/// Serialized with the `num` / `text` / `current` field names existing
/// clients read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    #[serde(rename = "num")]
    pub number: u64,
    #[serde(rename = "text")]
    pub label: PageLabel,
    #[serde(rename = "current")]
    pub is_current: bool,
}

impl PageLink {
    pub fn page(number: u64, is_current: bool) -> Self {
        Self {
            number,
            label: PageLabel::Page(number),
            is_current,
        }
    }

    pub fn previous(number: u64) -> Self {
        Self {
            number,
            label: PageLabel::Previous,
            is_current: false,
        }
    }

    pub fn next(number: u64) -> Self {
        Self {
            number,
            label: PageLabel::Next,
            is_current: false,
        }
    }

    /// Whether this is one of the block jump links.
    pub fn is_jump(&self) -> bool {
        !matches!(self.label, PageLabel::Page(_))
    }
}

/// One fetched page plus its navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub items: Vec<JsonValue>,
    pub paging: Vec<PageLink>,
    pub window: PageWindow,
}

impl PageResult {
    /// Split into the `(items, paging)` pair list handlers serialize.
    pub fn into_parts(self) -> (Vec<JsonValue>, Vec<PageLink>) {
        (self.items, self.paging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sizes_fall_back_to_defaults() {
        let req = PageRequest::new(3).with_page_size(0).with_block_size(0);
        assert_eq!(req.current_page, 3);
        assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(req.block_size, DEFAULT_BLOCK_SIZE);
    }

    #[test]
    fn links_use_wire_field_names() {
        let json = serde_json::to_value(vec![
            PageLink::previous(3),
            PageLink::page(4, true),
            PageLink::next(9),
        ])
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {"num": 3, "text": "«", "current": false},
                {"num": 4, "text": 4, "current": true},
                {"num": 9, "text": "»", "current": false},
            ])
        );
    }

    #[test]
    fn label_display() {
        assert_eq!(PageLabel::Page(12).to_string(), "12");
        assert_eq!(PageLabel::Previous.to_string(), "«");
        assert_eq!(PageLabel::Next.to_string(), "»");
        assert!(PageLink::next(2).is_jump());
        assert!(!PageLink::page(2, false).is_jump());
    }
}
