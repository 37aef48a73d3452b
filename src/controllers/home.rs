use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    domain::blog::{BlogSummary, FeedSummaryService},
    domain::shared::{Diagnostic, Localization},
    error::{AppError, AppResult},
};

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub blogpost: Option<BlogSummary>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct HomeController {
    feed_service: Arc<FeedSummaryService>,
    localization: Localization,
}

impl HomeController {
    pub fn new(feed_service: Arc<FeedSummaryService>, localization: Localization) -> Self {
        Self {
            feed_service,
            localization,
        }
    }

    /// GET /{lang}/home - Home page context with the latest blog post
    pub async fn home(
        State(controller): State<Arc<HomeController>>,
        Path(lang): Path<String>,
    ) -> AppResult<Json<HomeResponse>> {
        if !controller.localization.is_supported(&lang) {
            return Err(AppError::NotFound(format!("Unsupported language {lang}")));
        }

        let (blogpost, diagnostics) = controller
            .feed_service
            .get_latest_summary(&lang)
            .await
            .into_parts();

        Ok(Json(HomeResponse {
            blogpost,
            diagnostics,
        }))
    }
}
