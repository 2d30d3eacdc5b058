pub mod commandes;
