// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_repository;
pub mod http_response;
pub mod json_mapper;
pub mod record_writer;
