use crate::domain::resources::{RepositoryError, Resource, ResourceKind, ResourceRepository};
use crate::infrastructure::db::{check_connection, DbPool};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

const RESOURCE_COLUMNS: &str = "id, slug, title, tags, private, deleted_at, created_at";

pub struct PgResourceRepository {
    pool: Arc<DbPool>,
}

impl PgResourceRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    async fn find_by_slug(
        &self,
        kind: ResourceKind,
        slug: &str,
    ) -> Result<Option<Resource>, RepositoryError> {
        let pool = self.pool.as_ref();
        let resource = sqlx::query_as::<_, Resource>(&format!(
            r#"
            SELECT {RESOURCE_COLUMNS}
            FROM {}
            WHERE slug = $1
            "#,
            kind.table()
        ))
        .bind(slug)
        .fetch_optional(pool)
        .await?;

        Ok(resource)
    }

    async fn find_by_id(
        &self,
        kind: ResourceKind,
        id: Uuid,
    ) -> Result<Option<Resource>, RepositoryError> {
        let pool = self.pool.as_ref();
        let resource = sqlx::query_as::<_, Resource>(&format!(
            r#"
            SELECT {RESOURCE_COLUMNS}
            FROM {}
            WHERE id = $1
            "#,
            kind.table()
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(resource)
    }

    async fn find_visible_by_tags(
        &self,
        kind: ResourceKind,
        tags: &[String],
    ) -> Result<Vec<Resource>, RepositoryError> {
        let pool = self.pool.as_ref();
        let resources = sqlx::query_as::<_, Resource>(&format!(
            r#"
            SELECT {RESOURCE_COLUMNS}
            FROM {}
            WHERE NOT private
              AND deleted_at IS NULL
              AND tags @> $1
            ORDER BY created_at DESC
            "#,
            kind.table()
        ))
        .bind(tags)
        .fetch_all(pool)
        .await?;

        Ok(resources)
    }

    async fn is_ready(&self) -> bool {
        check_connection(&self.pool).await.unwrap_or(false)
    }
}
