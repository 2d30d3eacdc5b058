use std::sync::Arc;

use crate::application::dto::CommandeDto;
use crate::application::mapper::CommandeMapper;
use crate::config::RetentionWindow;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::errors::DomainError;
use crate::domain::ports::CommandeRepository;

pub struct CommandeService<R> {
    repo: R,
    retention: RetentionWindow,
    clock: Arc<dyn Clock>,
}

impl<R: CommandeRepository> CommandeService<R> {
    pub fn new(repo: R, retention: RetentionWindow) -> Self {
        Self::with_clock(repo, retention, Arc::new(SystemClock))
    }

    pub fn with_clock(repo: R, retention: RetentionWindow, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            retention,
            clock,
        }
    }

    /// Commandes dated strictly after today minus the retention window, in
    /// store order.
    pub fn list_recent(&self) -> Result<Vec<CommandeDto>, DomainError> {
        let cutoff = self.retention.cutoff(self.clock.today());
        Ok(self
            .repo
            .find_all()?
            .into_iter()
            .filter(|commande| commande.is_after(cutoff))
            .map(CommandeMapper::to_dto)
            .collect())
    }

    pub fn get_commande(&self, id: i64) -> Result<CommandeDto, DomainError> {
        self.repo
            .find_by_id(id)?
            .map(CommandeMapper::to_dto)
            .ok_or(DomainError::NotFound)
    }

    /// Persists a new commande. Any `id` carried by `dto` is discarded.
    pub fn create_commande(&self, dto: CommandeDto) -> Result<CommandeDto, DomainError> {
        let mut commande = CommandeMapper::to_entity(dto);
        commande.id = None;
        let saved = self.repo.save(commande)?;
        Ok(CommandeMapper::to_dto(saved))
    }

    /// Replaces the four mutable fields of an existing commande. Fields
    /// missing from `dto` are cleared, not kept.
    pub fn update_commande(&self, id: i64, dto: CommandeDto) -> Result<CommandeDto, DomainError> {
        let mut existing = self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;
        existing.description = dto.description;
        existing.quantite = dto.quantite;
        existing.date = dto.date;
        existing.montant = dto.montant;
        let saved = self.repo.save(existing)?;
        Ok(CommandeMapper::to_dto(saved))
    }

    pub fn delete_commande(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.exists_by_id(id)? {
            return Err(DomainError::NotFound);
        }
        self.repo.delete_by_id(id)
    }
}
