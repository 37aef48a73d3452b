use super::{PAGES_BRANCH, PAGES_REPO};
use chrono::{DateTime, Utc};
use portal_front::domain::resources::Resource;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn resource(slug: &str, tags: &[&str], created_at: DateTime<Utc>) -> Resource {
    Resource {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: format!("Title of {slug}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        private: false,
        deleted_at: None,
        created_at,
    }
}

/// RSS document with a single item
pub fn rss_item(title: &str, link: &str, pub_date: &str, description: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>Blog</title>
    <item>
      <title>{title}</title>
      <link>{link}</link>
      <pubDate>{pub_date}</pubDate>
      <description><![CDATA[{description}]]></description>
    </item>
  </channel>
</rss>"#
    )
}

pub async fn mount_feed(server: &MockServer, language: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/feed/{language}")))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Path of a page file on the raw host
pub fn raw_page_path(slug: &str, extension: &str) -> String {
    format!("/{PAGES_REPO}/{PAGES_BRANCH}/pages/{slug}.{extension}")
}

/// Serve a markdown page: the `.md` check answers 200 and the body follows.
pub async fn mount_markdown_page(server: &MockServer, slug: &str, body: &str) {
    Mock::given(method("HEAD"))
        .and(path(raw_page_path(slug, "md")))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(raw_page_path(slug, "md")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}
