//! The envelope wrapping the listing responses

/// A page of results with the pagination state returned by the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Page<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default)]
    pub paging: Paging,
    #[serde(default)]
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Whether the API advertises a following page
    pub fn has_more(&self) -> bool {
        self.paging.next.is_some()
    }
}

/// The uris pointing to the neighbor pages of the same listing
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn decodes_a_bare_data_array() {
        let page: Page<serde_json::Value> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 0);
        assert!(page.data.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn decodes_the_paging_uris() {
        let page: Page<serde_json::Value> = serde_json::from_str(
            r#"{
    "total": 50,
    "page": 2,
    "per_page": 25,
    "paging": {
        "next": null,
        "previous": "/folders?page=1",
        "first": "/folders?page=1",
        "last": "/folders?page=2"
    },
    "data": []
}"#,
        )
        .unwrap();
        assert_eq!(page.total, 50);
        assert_eq!(page.paging.previous.as_deref(), Some("/folders?page=1"));
        assert!(!page.has_more());
    }
}
