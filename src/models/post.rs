use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub published_at: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub views: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Comment ids are sequential within their post (count + 1). There is no
/// deletion path, so the scheme cannot collide today.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub content: String,
    pub published_at: String,
}
