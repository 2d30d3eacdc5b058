pub mod clock;
pub mod commande;
pub mod errors;
pub mod ports;
