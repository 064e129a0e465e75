use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bbcars_common::{Article, Language};
use serde::Serialize;

use crate::error::ApiError;
use crate::handlers::inventory_handlers::LangQuery;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ArticleSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub image: &'static str,
    pub topic: &'static str,
}

impl ArticleSummary {
    fn new(article: &Article, lang: Language) -> Self {
        Self {
            id: article.id,
            title: article.title.get(lang),
            date: article.date,
            excerpt: article.excerpt.get(lang),
            author: article.author,
            image: article.image,
            topic: article.topic.get(lang),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub summary: ArticleSummary,
    pub body: &'static [&'static str],
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(LangQuery { lang }): Query<LangQuery>,
) -> Json<Vec<ArticleSummary>> {
    Json(state.catalog.articles().iter().map(|article| ArticleSummary::new(article, lang)).collect())
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(LangQuery { lang }): Query<LangQuery>,
) -> Result<Json<ArticleDetail>, ApiError> {
    let article = state.catalog.find_article(&id).ok_or_else(|| ApiError::not_found("Article"))?;
    Ok(Json(ArticleDetail {
        summary: ArticleSummary::new(article, lang),
        body: article.body.get(lang),
    }))
}
