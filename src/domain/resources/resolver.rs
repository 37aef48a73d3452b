use super::model::{Resource, ResourceKind, ResourceReference};
use super::ResourceRepository;
use std::sync::Arc;
use uuid::Uuid;

/// Turns front-matter reference lists into resources.
pub struct TaggedResourceResolver {
    repository: Arc<dyn ResourceRepository>,
}

impl TaggedResourceResolver {
    pub fn new(repository: Arc<dyn ResourceRepository>) -> Self {
        Self { repository }
    }

    /// Direct references in list order, then tag matches newest first.
    /// The two groups are not de-duplicated.
    pub async fn resolve(&self, kind: ResourceKind, references: &[Option<String>]) -> Vec<Resource> {
        let mut resources = Vec::new();
        let mut tags = Vec::new();

        for reference in references
            .iter()
            .filter_map(|raw| ResourceReference::parse(raw.as_deref()))
        {
            match reference {
                ResourceReference::Direct(identifier) => {
                    if let Some(resource) = self.find_direct(kind, &identifier).await {
                        resources.push(resource);
                    }
                }
                ResourceReference::Tag(tag) => tags.push(tag),
            }
        }

        if !tags.is_empty() {
            match self.repository.find_visible_by_tags(kind, &tags).await {
                Ok(mut tagged) => resources.append(&mut tagged),
                Err(e) => {
                    tracing::error!(%kind, ?tags, error = %e, "Failed to resolve tagged resources");
                }
            }
        }

        resources
    }

    async fn find_direct(&self, kind: ResourceKind, identifier: &str) -> Option<Resource> {
        match self.repository.find_by_slug(kind, identifier).await {
            Ok(Some(resource)) => return Some(resource),
            Ok(None) => {}
            Err(e) => {
                tracing::error!(%kind, identifier, error = %e, "Failed to resolve resource by slug");
                return None;
            }
        }

        let Ok(id) = Uuid::parse_str(identifier) else {
            tracing::debug!(%kind, identifier, "Unknown resource reference");
            return None;
        };

        self.repository
            .find_by_id(kind, id)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(%kind, identifier, error = %e, "Failed to resolve resource by id");
                None
            })
    }
}
