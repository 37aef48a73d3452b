// End-to-end tests for the portal front HTTP surface
//
// Each test gets its own app instance through test-context lifecycle hooks:
// - a wiremock server standing in for the blog feed host and the raw page host
// - an in-memory resource repository seeded by the test
// - a real axum server on an ephemeral port, driven by a hyper client
//
// Repository tests run against a shared PostgreSQL container, one database per test.

mod test_pages;
mod test_resource_repository;
