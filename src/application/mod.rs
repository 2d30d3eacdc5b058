pub mod commande_service;
pub mod dto;
pub mod mapper;
