use bigdecimal::BigDecimal;
use chrono::NaiveDate;

/// A persisted commande.
///
/// `id` is `None` until the store has assigned one. The remaining fields are
/// optional because an update replaces all of them at once, absent values
/// included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Commande {
    pub id: Option<i64>,
    pub description: Option<String>,
    pub quantite: Option<i32>,
    pub date: Option<NaiveDate>,
    pub montant: Option<BigDecimal>,
}

impl Commande {
    /// Whether the commande is dated strictly after `cutoff`.
    ///
    /// An undated commande is never recent.
    pub fn is_after(&self, cutoff: NaiveDate) -> bool {
        self.date.is_some_and(|date| date > cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(date: Option<NaiveDate>) -> Commande {
        Commande {
            date,
            ..Commande::default()
        }
    }

    #[test]
    fn later_date_is_after_cutoff() {
        let cutoff = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let next_day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(dated(Some(next_day)).is_after(cutoff));
    }

    #[test]
    fn cutoff_date_itself_is_not_after() {
        let cutoff = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(!dated(Some(cutoff)).is_after(cutoff));
    }

    #[test]
    fn undated_commande_is_never_after() {
        let cutoff = NaiveDate::MIN;
        assert!(!dated(None).is_after(cutoff));
    }
}
