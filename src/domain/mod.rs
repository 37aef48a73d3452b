pub mod blog;
pub mod pages;
pub mod resources;
pub mod shared;
