use serde::Serialize;

/// A nutrition-news headline. Articles without a title or url are dropped
/// during mapping, so both fields are always present here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
    pub published_at: Option<String>,
    pub source: Option<String>,
}
