use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::commande::Commande;
use crate::domain::errors::DomainError;
use crate::domain::ports::CommandeRepository;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Commande>,
    last_id: i64,
}

/// Process-local store. Ids are assigned from 1 upwards and never reused,
/// and `find_all` yields rows in id order.
#[derive(Debug, Default)]
pub struct InMemoryCommandeRepository {
    table: Mutex<Table>,
}

impl InMemoryCommandeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, DomainError> {
        self.table
            .lock()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

impl CommandeRepository for InMemoryCommandeRepository {
    fn find_all(&self) -> Result<Vec<Commande>, DomainError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Commande>, DomainError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    fn save(&self, mut commande: Commande) -> Result<Commande, DomainError> {
        let mut table = self.lock()?;
        let id = match commande.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(_) => return Err(DomainError::NotFound),
            None => {
                table.last_id += 1;
                table.last_id
            }
        };
        commande.id = Some(id);
        table.rows.insert(id, commande.clone());
        Ok(commande)
    }

    fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.lock()?.rows.contains_key(&id))
    }

    fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        self.lock()?.rows.remove(&id);
        Ok(())
    }
}
