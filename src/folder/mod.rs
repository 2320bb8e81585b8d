use chrono::{DateTime, Utc};

use crate::pictures::Pictures;

pub mod get;
pub mod list;
pub mod videos;

/// A folder on Vimeo, grouping videos and other folders
///
/// The `parent` reference and the `subfolders` list are independent optional
/// values filled by the API, one nesting level at most.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Folder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub top_level: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pictures: Option<Pictures>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_video_featured_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Folder>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subfolders: Option<Vec<Folder>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Folder {
    /// Finds a direct subfolder by name
    pub fn find_subfolder(&self, name: &str) -> Option<&Folder> {
        self.subfolders
            .as_ref()
            .and_then(|list| list.iter().find(|item| item.name == name))
    }
}

/// The user interaction state and parent reference attached to a folder
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactions: Option<Interactions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder: Option<Box<Folder>>,
}

/// The user actions available on a folder
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Interactions {
    #[serde(rename = "watchlater", skip_serializing_if = "Option::is_none")]
    pub watch_later: Option<Interaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like: Option<Interaction>,
}

/// A named link to a user action
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Interaction {
    #[serde(rename = "URI", skip_serializing_if = "String::is_empty")]
    pub uri: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
}
