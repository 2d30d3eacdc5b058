pub mod commande_repo;
pub mod memory_repo;
pub mod models;
