use crate::models::Category;
use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DeriveCategoryParams {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DeriveCategoryResponse {
    pub category: Category,
    pub keyword: &'static str,
    pub emoji: &'static str,
}

/// GET /categories/derive?text=...
/// Preview which kind of place a mood text will search for
pub async fn derive_category(
    Query(params): Query<DeriveCategoryParams>,
) -> Json<DeriveCategoryResponse> {
    let category = Category::derive(&params.text);

    Json(DeriveCategoryResponse {
        category,
        keyword: category.keyword(),
        emoji: category.emoji(),
    })
}
