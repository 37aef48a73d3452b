use crate::domain::resources::{RepositoryError, Resource, ResourceKind, ResourceRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Resource repository kept in process memory.
#[derive(Default)]
pub struct InMemoryResourceRepository {
    resources: RwLock<HashMap<ResourceKind, Vec<Resource>>>,
}

impl InMemoryResourceRepository {
    pub fn with(self, kind: ResourceKind, resource: Resource) -> Self {
        self.insert(kind, resource);
        self
    }

    pub fn insert(&self, kind: ResourceKind, resource: Resource) {
        if let Ok(mut resources) = self.resources.write() {
            resources.entry(kind).or_default().push(resource);
        }
    }

    fn find(
        &self,
        kind: ResourceKind,
        predicate: impl Fn(&Resource) -> bool,
    ) -> Result<Vec<Resource>, RepositoryError> {
        let resources = self
            .resources
            .read()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
        Ok(resources
            .get(&kind)
            .map(|all| all.iter().filter(|r| predicate(r)).cloned().collect())
            .unwrap_or_default())
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn find_by_slug(
        &self,
        kind: ResourceKind,
        slug: &str,
    ) -> Result<Option<Resource>, RepositoryError> {
        Ok(self.find(kind, |r| r.slug == slug)?.into_iter().next())
    }

    async fn find_by_id(
        &self,
        kind: ResourceKind,
        id: Uuid,
    ) -> Result<Option<Resource>, RepositoryError> {
        Ok(self.find(kind, |r| r.id == id)?.into_iter().next())
    }

    async fn find_visible_by_tags(
        &self,
        kind: ResourceKind,
        tags: &[String],
    ) -> Result<Vec<Resource>, RepositoryError> {
        let mut resources = self.find(kind, |r| {
            r.is_visible() && tags.iter().all(|tag| r.tags.contains(tag))
        })?;
        resources.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(resources)
    }

    async fn is_ready(&self) -> bool {
        self.resources.read().is_ok()
    }
}
