use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::commande::Commande;
use crate::domain::errors::DomainError;
use crate::domain::ports::CommandeRepository;
use crate::schema::commandes;

use super::models::{CommandeRow, NewCommandeRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselCommandeRepository {
    pool: DbPool,
}

impl DieselCommandeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CommandeRepository for DieselCommandeRepository {
    fn find_all(&self) -> Result<Vec<Commande>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = commandes::table
            .select(CommandeRow::as_select())
            .order(commandes::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Commande::from).collect())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Commande>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = commandes::table
            .find(id)
            .select(CommandeRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Commande::from))
    }

    fn save(&self, commande: Commande) -> Result<Commande, DomainError> {
        let mut conn = self.pool.get()?;

        let row = match commande.id {
            None => diesel::insert_into(commandes::table)
                .values(&NewCommandeRow::from(commande))
                .returning(CommandeRow::as_returning())
                .get_result(&mut conn)?,
            Some(id) => diesel::update(commandes::table.find(id))
                .set(&NewCommandeRow::from(commande))
                .returning(CommandeRow::as_returning())
                .get_result(&mut conn)
                .optional()?
                .ok_or(DomainError::NotFound)?,
        };

        log::debug!("saved commande {}", row.id);
        Ok(Commande::from(row))
    }

    fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let exists = diesel::select(diesel::dsl::exists(commandes::table.find(id)))
            .get_result(&mut conn)?;

        Ok(exists)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(commandes::table.find(id)).execute(&mut conn)?;
        log::debug!("deleted {} row(s) for commande {}", deleted, id);

        Ok(())
    }
}
