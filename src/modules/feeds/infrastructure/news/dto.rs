use serde::Deserialize;

use crate::modules::feeds::domain::NewsArticle;

#[derive(Debug, Clone, Deserialize)]
pub struct NewsResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<NewsArticleDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsArticleDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub source: Option<NewsSourceDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsSourceDto {
    pub name: Option<String>,
}

impl NewsResponse {
    /// Articles missing a title or url are dropped; at most `limit` survive.
    pub fn into_articles(self, limit: usize) -> Vec<NewsArticle> {
        self.articles
            .into_iter()
            .filter_map(|dto| {
                let title = dto.title?;
                let url = dto.url?;
                Some(NewsArticle {
                    title,
                    description: dto.description,
                    url,
                    image_url: dto.url_to_image,
                    published_at: dto.published_at,
                    source: dto.source.and_then(|s| s.name),
                })
            })
            .take(limit)
            .collect()
    }
}
