use crate::e2e::helpers;

use chrono::{TimeZone, Utc};
use helpers::database::DatabaseContext;
use helpers::fixtures::resource;
use portal_front::domain::resources::{ResourceKind, ResourceRepository, TaggedResourceResolver};
use portal_front::infrastructure::repositories::PgResourceRepository;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_context::test_context;

fn repository(ctx: &DatabaseContext) -> PgResourceRepository {
    PgResourceRepository::new(ctx.pool.clone())
}

#[test_context(DatabaseContext)]
#[tokio::test]
async fn it_should_return_visible_tagged_resources_newest_first(ctx: &DatabaseContext) {
    let at = |year, month| Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap();
    let older = resource("older", &["climate", "air"], at(2023, 1));
    let newer = resource("newer", &["climate"], at(2024, 1));
    let mut private = resource("private", &["climate"], at(2024, 6));
    private.private = true;
    let mut deleted = resource("deleted", &["climate"], at(2024, 7));
    deleted.deleted_at = Some(at(2024, 8));
    let untagged = resource("untagged", &["water"], at(2024, 9));

    for r in [&older, &newer, &private, &deleted, &untagged] {
        ctx.insert(ResourceKind::Dataset, r).await;
    }

    let found = repository(ctx)
        .find_visible_by_tags(ResourceKind::Dataset, &["climate".to_string()])
        .await
        .unwrap();

    let slugs: Vec<&str> = found.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["newer", "older"]);
}

#[test_context(DatabaseContext)]
#[tokio::test]
async fn it_should_require_every_requested_tag(ctx: &DatabaseContext) {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    ctx.insert(ResourceKind::Reuse, &resource("both", &["climate", "air"], created))
        .await;
    ctx.insert(ResourceKind::Reuse, &resource("one", &["climate"], created))
        .await;

    let found = repository(ctx)
        .find_visible_by_tags(
            ResourceKind::Reuse,
            &["climate".to_string(), "air".to_string()],
        )
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].slug, "both");
}

#[test_context(DatabaseContext)]
#[tokio::test]
async fn it_should_find_hidden_resources_by_slug_and_id(ctx: &DatabaseContext) {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut private = resource("private-one", &[], created);
    private.private = true;
    let mut deleted = resource("deleted-one", &[], created);
    deleted.deleted_at = Some(created);
    ctx.insert(ResourceKind::Dataset, &private).await;
    ctx.insert(ResourceKind::Dataset, &deleted).await;

    let repo = repository(ctx);

    let by_slug = repo
        .find_by_slug(ResourceKind::Dataset, "private-one")
        .await
        .unwrap();
    assert_eq!(by_slug, Some(private));

    let by_id = repo
        .find_by_id(ResourceKind::Dataset, deleted.id)
        .await
        .unwrap();
    assert_eq!(by_id, Some(deleted));

    // Kinds live in separate tables
    let other_kind = repo
        .find_by_slug(ResourceKind::Reuse, "private-one")
        .await
        .unwrap();
    assert_eq!(other_kind, None);
}

#[test_context(DatabaseContext)]
#[tokio::test]
async fn it_should_resolve_front_matter_references_against_postgres(ctx: &DatabaseContext) {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let by_slug = resource("air-quality", &[], created);
    let by_id = resource("water-quality", &[], created);
    ctx.insert(ResourceKind::Dataset, &by_slug).await;
    ctx.insert(ResourceKind::Dataset, &by_id).await;

    let resolver = TaggedResourceResolver::new(Arc::new(repository(ctx)));
    let id = by_id.id.to_string();
    let references = vec![
        Some("not-a-uuid-nor-a-slug".to_string()),
        Some(id),
        None,
        Some("air-quality".to_string()),
    ];

    let resolved = resolver.resolve(ResourceKind::Dataset, &references).await;

    let slugs: Vec<&str> = resolved.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["water-quality", "air-quality"]);
}

#[test_context(DatabaseContext)]
#[tokio::test]
async fn it_should_report_ready_when_connected(ctx: &DatabaseContext) {
    assert!(repository(ctx).is_ready().await);
}
