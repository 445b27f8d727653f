//! Paging metadata trailing list responses.

/// `total:offset:page_size` as reported by the server.
///
/// All zeros when a response omits the section.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageInfo {
    pub total: u64,
    pub offset: u64,
    pub page_size: u64,
}

impl PageInfo {
    /// `true` if more results exist past this page.
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.page_size) < self.total
    }
}

/// One page of decoded entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, info: PageInfo) -> Self {
        Page { items, info }
    }

    /// The "no results" page returned for sentinel responses.
    pub fn empty() -> Self {
        Page {
            items: Vec::new(),
            info: PageInfo::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Page::empty()
    }
}
