pub mod config;
pub mod crop;
pub mod edges;
pub mod info;
