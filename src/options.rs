//! The optional query parameters that can be applied to the commands

/// The ordering direction used together with a sort field
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

/// The optional, named parameters appended to the query string of a request
///
/// Only the fields that are set end up in the query string, each of them exactly once.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct CallOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl CallOptions {
    /// Index of the page to query.
    pub fn set_page(&mut self, value: u32) {
        self.page = Some(value);
    }

    /// Index of the page to query.
    pub fn with_page(mut self, value: u32) -> Self {
        self.set_page(value);
        self
    }

    /// Number of items to return per page.
    pub fn set_per_page(&mut self, value: u32) {
        self.per_page = Some(value);
    }

    /// Number of items to return per page.
    pub fn with_per_page(mut self, value: u32) -> Self {
        self.set_per_page(value);
        self
    }

    /// Search query to filter the results with.
    pub fn set_query<S: Into<String>>(&mut self, value: S) {
        self.query = Some(value.into());
    }

    /// Search query to filter the results with.
    pub fn with_query<S: Into<String>>(mut self, value: S) -> Self {
        self.set_query(value);
        self
    }

    /// Field to sort the results by.
    pub fn set_sort<S: Into<String>>(&mut self, value: S) {
        self.sort = Some(value.into());
    }

    /// Field to sort the results by.
    pub fn with_sort<S: Into<String>>(mut self, value: S) -> Self {
        self.set_sort(value);
        self
    }

    /// Direction the results are sorted in.
    pub fn set_direction(&mut self, value: Direction) {
        self.direction = Some(value);
    }

    /// Direction the results are sorted in.
    pub fn with_direction(mut self, value: Direction) -> Self {
        self.set_direction(value);
        self
    }

    /// Comma separated list of the fields to include in the response.
    pub fn set_fields<S: Into<String>>(&mut self, value: S) {
        self.fields = Some(value.into());
    }

    /// Comma separated list of the fields to include in the response.
    pub fn with_fields<S: Into<String>>(mut self, value: S) -> Self {
        self.set_fields(value);
        self
    }
}
