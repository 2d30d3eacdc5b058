use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::commande::Commande;
use crate::schema::commandes;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = commandes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommandeRow {
    pub id: i64,
    pub description: Option<String>,
    pub quantite: Option<i32>,
    pub date: Option<NaiveDate>,
    pub montant: Option<BigDecimal>,
}

/// The mutable columns. Used both to insert a fresh row and as the update
/// changeset, where `None` must write NULL rather than skip the column.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = commandes)]
#[diesel(treat_none_as_null = true)]
pub struct NewCommandeRow {
    pub description: Option<String>,
    pub quantite: Option<i32>,
    pub date: Option<NaiveDate>,
    pub montant: Option<BigDecimal>,
}

impl From<CommandeRow> for Commande {
    fn from(row: CommandeRow) -> Self {
        Commande {
            id: Some(row.id),
            description: row.description,
            quantite: row.quantite,
            date: row.date,
            montant: row.montant,
        }
    }
}

impl From<Commande> for NewCommandeRow {
    fn from(commande: Commande) -> Self {
        NewCommandeRow {
            description: commande.description,
            quantite: commande.quantite,
            date: commande.date,
            montant: commande.montant,
        }
    }
}
