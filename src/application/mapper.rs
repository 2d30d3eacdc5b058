//! Conversions between the persisted [`Commande`] and the API [`CommandeDto`].

use crate::application::dto::CommandeDto;
use crate::domain::commande::Commande;

pub struct CommandeMapper;

impl CommandeMapper {
    pub fn to_dto(entity: Commande) -> CommandeDto {
        CommandeDto {
            id: entity.id,
            description: entity.description,
            quantite: entity.quantite,
            date: entity.date,
            montant: entity.montant,
        }
    }

    pub fn to_entity(dto: CommandeDto) -> Commande {
        Commande {
            id: dto.id,
            description: dto.description,
            quantite: dto.quantite,
            date: dto.date,
            montant: dto.montant,
        }
    }
}
