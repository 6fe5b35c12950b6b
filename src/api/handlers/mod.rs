//! HTTP request handlers.

pub mod article_handler;

pub use article_handler::article_routes;
