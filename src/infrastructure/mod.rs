pub mod cache;
pub mod config;
pub mod db;
pub mod feed;
pub mod http;
pub mod middleware;
pub mod remote;
pub mod repositories;
