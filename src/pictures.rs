//! The picture resources embedded in the other entities

/// The active picture set of a video or a folder
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Pictures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    pub active: bool,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<PictureSize>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_key: String,
    pub default_picture: bool,
}

/// A single rendition of a picture set
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PictureSize {
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_with_play_button: Option<String>,
}
