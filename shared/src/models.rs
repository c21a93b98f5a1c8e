use serde::{Serialize, Deserialize};

/// One card in the mission-values grid. `icon` is SVG path data rendered
/// inline by the view layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub image_url: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: String,
    pub title: String,
    /// Short summary shown on the news card.
    pub content: String,
    /// Full article body, trusted HTML rendered in the detail modal.
    pub full_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub image_url: String,
    pub alt: String,
}

/// A chairperson candidate. The roster is fixed when the election widget is
/// created; only `votes` changes afterwards, and only through the widget's
/// own operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub photo_url: String,
    pub slogan: String,
    pub votes: u32,
}

impl Candidate {
    pub fn new(id: u32, name: impl Into<String>, photo_url: impl Into<String>, slogan: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            photo_url: photo_url.into(),
            slogan: slogan.into(),
            votes: 0,
        }
    }
}

/// One element of the persisted tally snapshot (`election-votes` key).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TallyEntry {
    pub id: u32,
    pub votes: u32,
}
