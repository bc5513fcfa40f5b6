//! HTTP API: configuration, routing, and rendering of the inventory views.

pub mod app;
pub mod config;
pub mod middleware;
