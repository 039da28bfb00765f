//! CLI commands for routeplan

pub mod airports;
pub mod dispatch;
pub mod init;
pub mod path;
pub mod plan;
pub mod routes;
