use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::pages::{PageService, PageView},
    domain::shared::Localization,
    error::{AppError, AppResult},
};

pub struct PagesController {
    page_service: Arc<PageService>,
    localization: Localization,
}

impl PagesController {
    pub fn new(page_service: Arc<PageService>, localization: Localization) -> Self {
        Self {
            page_service,
            localization,
        }
    }

    /// GET /{lang}/pages/{slug} - Page content and referenced resources
    pub async fn show_page(
        State(controller): State<Arc<PagesController>>,
        Path((lang, slug)): Path<(String, String)>,
    ) -> AppResult<Json<PageView>> {
        if !controller.localization.is_supported(&lang) {
            return Err(AppError::NotFound(format!("Unsupported language {lang}")));
        }

        let slug = slug.trim_matches('/');
        if slug.is_empty() {
            return Err(AppError::NotFound("Page not found".to_string()));
        }

        controller
            .page_service
            .show_page(slug, &lang)
            .await
            .map(Json)
            .ok_or_else(|| AppError::NotFound(format!("Page {slug} not found")))
    }
}
