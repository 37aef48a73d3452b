pub mod error;
pub mod model;
pub mod resolver;

use async_trait::async_trait;
use uuid::Uuid;

pub use error::RepositoryError;
pub use model::{Resource, ResourceKind, ResourceReference, TAG_PREFIX};
pub use resolver::TaggedResourceResolver;

/// Read access to the published resources a page can reference.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn find_by_slug(
        &self,
        kind: ResourceKind,
        slug: &str,
    ) -> Result<Option<Resource>, RepositoryError>;

    async fn find_by_id(&self, kind: ResourceKind, id: Uuid)
        -> Result<Option<Resource>, RepositoryError>;

    /// Visible resources carrying every tag in `tags`, newest first.
    async fn find_visible_by_tags(
        &self,
        kind: ResourceKind,
        tags: &[String],
    ) -> Result<Vec<Resource>, RepositoryError>;

    async fn is_ready(&self) -> bool;
}
