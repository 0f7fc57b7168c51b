use serde::{Deserialize, Serialize};

/// A news article, public side and admin side alike.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsArticle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub titre: String,
    pub resume: String,
    pub contenu: String,
    pub categorie: String,
    /// Served path of the uploaded cover image, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub published_at: String,
}
