use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A commande as exchanged with API clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommandeDto {
    /// Assigned by the server; ignored on create and update.
    pub id: Option<i64>,
    pub description: Option<String>,
    pub quantite: Option<i32>,
    /// Calendar date, e.g. "2024-01-01".
    pub date: Option<NaiveDate>,
    /// Decimal amount, e.g. 9.99
    #[serde(default, with = "montant")]
    #[schema(value_type = Option<f64>)]
    pub montant: Option<BigDecimal>,
}

/// `montant` goes out as a JSON number and comes in as a number or a numeric
/// string. Both directions go through the decimal text so no binary float
/// digits end up in the stored value. Only amounts a JSON number can carry
/// back exactly are accepted.
mod montant {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(serde_json::Number),
        Text(String),
    }

    /// The `f64` holding exactly `amount`, if there is one.
    fn exact_f64(amount: &BigDecimal) -> Option<f64> {
        let number: f64 = amount.to_string().parse().ok()?;
        if !number.is_finite() {
            return None;
        }
        let back = BigDecimal::from_str(&number.to_string()).ok()?;
        (back == *amount).then_some(number)
    }

    pub fn serialize<S: Serializer>(
        value: &Option<BigDecimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(amount) => {
                let number = exact_f64(amount).ok_or_else(|| {
                    <S::Error as ser::Error>::custom(format!(
                        "montant {} has no exact JSON number",
                        amount
                    ))
                })?;
                serializer.serialize_f64(number)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigDecimal>, D::Error> {
        Option::<Raw>::deserialize(deserializer)?
            .map(|raw| {
                let text = match raw {
                    Raw::Number(n) => n.to_string(),
                    Raw::Text(s) => s,
                };
                let amount = BigDecimal::from_str(text.trim())
                    .map_err(<D::Error as de::Error>::custom)?;
                match exact_f64(&amount) {
                    Some(_) => Ok(amount),
                    None => Err(<D::Error as de::Error>::custom(format!(
                        "montant {} is out of range or too precise",
                        text.trim()
                    ))),
                }
            })
            .transpose()
    }
}
