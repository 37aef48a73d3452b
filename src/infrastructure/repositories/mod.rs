pub mod memory_resource_repository;
pub mod resource_repository;

pub use memory_resource_repository::InMemoryResourceRepository;
pub use resource_repository::PgResourceRepository;
