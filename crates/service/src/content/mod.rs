pub mod defaults;
pub mod repository;
