use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, size: Option<u64>) -> Result<Self, CoreError> {
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(CoreError::InvalidPagination { max: MAX_PAGE_SIZE });
        }

        Ok(Self {
            page: page.unwrap_or(0),
            size,
        })
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages: total_items.div_ceil(request.size),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_defaults() {
        let request = PageRequest::new(None, None).unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, DEFAULT_PAGE_SIZE);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_page_request_rejects_out_of_range_size() {
        assert_eq!(
            PageRequest::new(Some(0), Some(0)),
            Err(CoreError::InvalidPagination { max: MAX_PAGE_SIZE })
        );
        assert!(PageRequest::new(Some(0), Some(MAX_PAGE_SIZE + 1)).is_err());
        assert!(PageRequest::new(Some(3), Some(MAX_PAGE_SIZE)).is_ok());
    }

    #[test]
    fn test_paginated_total_pages_rounds_up() {
        let request = PageRequest::new(Some(1), Some(20)).unwrap();
        let page = Paginated::new(vec![1, 2, 3], request, 41);
        assert_eq!(page.total_pages, 3);
        assert_eq!(request.offset(), 20);

        let empty: Paginated<i32> = Paginated::new(vec![], request, 0);
        assert_eq!(empty.total_pages, 0);
    }
}
