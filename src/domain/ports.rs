use std::sync::Arc;

use super::commande::Commande;
use super::errors::DomainError;

/// Durable keyed storage for commandes.
pub trait CommandeRepository: Send + Sync + 'static {
    fn find_all(&self) -> Result<Vec<Commande>, DomainError>;
    fn find_by_id(&self, id: i64) -> Result<Option<Commande>, DomainError>;
    /// Inserts when `commande.id` is `None` (the store assigns one), otherwise
    /// replaces the row with that id, failing with `NotFound` if it is gone.
    fn save(&self, commande: Commande) -> Result<Commande, DomainError>;
    fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;
    fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}

impl<T: CommandeRepository + ?Sized> CommandeRepository for Arc<T> {
    fn find_all(&self) -> Result<Vec<Commande>, DomainError> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Commande>, DomainError> {
        (**self).find_by_id(id)
    }

    fn save(&self, commande: Commande) -> Result<Commande, DomainError> {
        (**self).save(commande)
    }

    fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        (**self).exists_by_id(id)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        (**self).delete_by_id(id)
    }
}
