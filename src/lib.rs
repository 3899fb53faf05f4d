pub mod ai;
pub mod auth;
pub mod cache;
pub mod chat;
pub mod db;
pub mod handlers;
pub mod models;
pub mod workflow;

pub use db::create_pool;
