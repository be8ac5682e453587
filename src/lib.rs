pub mod config;
pub mod constants;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod services;
