//! The video resources returned by the listing endpoints

use chrono::{DateTime, Utc};

use crate::pictures::Pictures;

/// A video hosted on Vimeo
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Video {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
    /// Duration in seconds
    pub duration: u32,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pictures: Option<Pictures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_key: String,
}

/// The visibility settings of a video
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Privacy {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub view: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub embed: String,
    pub download: bool,
    pub add: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comments: String,
}

/// The play counters of a video
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Stats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plays: Option<u64>,
}

/// A tag attached to a video
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Tag {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub canonical: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_key: String,
}

#[cfg(test)]
mod tests {
    use super::Video;

    #[test]
    fn decodes_a_video_with_hidden_stats() {
        let video: Video = serde_json::from_str(
            r#"{
    "uri": "/videos/531191105",
    "name": "Intro",
    "description": null,
    "link": "https://vimeo.com/531191105",
    "duration": 42,
    "width": 1920,
    "height": 1080,
    "created_time": "2021-03-25T11:29:36+00:00",
    "privacy": { "view": "anybody", "embed": "public", "download": false, "add": true, "comments": "anybody" },
    "stats": { "plays": null },
    "status": "available",
    "resource_key": "0a9f1b2c3d4e5f60718293a4b5c6d7e8f9001122"
}"#,
        )
        .unwrap();
        assert_eq!(video.name, "Intro");
        assert_eq!(video.duration, 42);
        assert!(video.description.is_none());
        assert_eq!(video.stats.unwrap().plays, None);
        assert_eq!(video.privacy.unwrap().view, "anybody");
    }
}
