use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Validity
// ============================================================================

/// Числовое значение, которым бэкенд кодирует бессрочный SKU.
///
/// Совпадает с `Number.MAX_SAFE_INTEGER`: наибольшее целое, которое JSON-слой
/// каталога хранит без потери точности.
pub const UNBOUNDED_VALIDITY_DAYS: u64 = 9_007_199_254_740_991;

pub const DAYS_PER_MONTH: u64 = 30;
pub const DAYS_PER_YEAR: u64 = 365;

/// Срок действия SKU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validity {
    /// Бессрочная лицензия
    Unbounded,
    /// Ограниченный срок в днях
    Bounded { days: u64 },
}

impl Validity {
    pub fn days(days: u64) -> Self {
        if days >= UNBOUNDED_VALIDITY_DAYS {
            Validity::Unbounded
        } else {
            Validity::Bounded { days }
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Validity::Unbounded)
    }

    /// Значение для передачи по сети
    pub fn to_wire(&self) -> u64 {
        match self {
            Validity::Unbounded => UNBOUNDED_VALIDITY_DAYS,
            Validity::Bounded { days } => *days,
        }
    }

    /// Человекочитаемая подпись для таблицы SKU
    pub fn label(&self) -> String {
        match self {
            Validity::Unbounded => "Бессрочно".to_string(),
            Validity::Bounded { days } => super::period::days_to_unit_string(*days),
        }
    }
}

impl Default for Validity {
    fn default() -> Self {
        Validity::Bounded { days: 0 }
    }
}

impl Serialize for Validity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for Validity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // JS клиенты иногда присылают 60.0 вместо 60
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IntOrFloat {
            Int(u64),
            Float(f64),
        }

        // null ведёт себя как отсутствующее поле
        match Option::<IntOrFloat>::deserialize(deserializer)? {
            None => Ok(Validity::default()),
            Some(IntOrFloat::Int(days)) => Ok(Validity::days(days)),
            Some(IntOrFloat::Float(v)) if v.is_finite() && v >= 0.0 => {
                if v >= UNBOUNDED_VALIDITY_DAYS as f64 {
                    Ok(Validity::Unbounded)
                } else {
                    Ok(Validity::days(v.trunc() as u64))
                }
            }
            Some(IntOrFloat::Float(v)) => {
                Err(de::Error::custom(format!("invalid validity: {}", v)))
            }
        }
    }
}

// ============================================================================
// Validity unit
// ============================================================================

/// Единица срока в форме
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidityUnit {
    #[default]
    Unset,
    Months,
    Years,
}

impl ValidityUnit {
    /// Ключ для `<select>`; пустая строка для `Unset`
    pub fn as_key(&self) -> &'static str {
        match self {
            ValidityUnit::Unset => "",
            ValidityUnit::Months => "months",
            ValidityUnit::Years => "years",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, ValidityUnit::Unset)
    }

    /// Количество дней в одной единице
    pub fn days_per_unit(&self) -> Option<u64> {
        match self {
            ValidityUnit::Unset => None,
            ValidityUnit::Months => Some(DAYS_PER_MONTH),
            ValidityUnit::Years => Some(DAYS_PER_YEAR),
        }
    }
}

impl FromStr for ValidityUnit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "month" | "months" => ValidityUnit::Months,
            "year" | "years" => ValidityUnit::Years,
            _ => ValidityUnit::Unset,
        })
    }
}

// ============================================================================
// SKU record
// ============================================================================

/// SKU продукта в том виде, в котором его хранит каталог
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SkuRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "skuName", default, deserialize_with = "null_as_default")]
    pub sku_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,

    #[serde(default)]
    pub validity: Validity,

    #[serde(default, deserialize_with = "null_as_default")]
    pub lifetime: bool,

    /// Поля каталога, о которых форма не знает (сохраняются при обновлении)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SkuRecord {
    /// Бессрочный ли SKU (флаг или значение срока)
    pub fn is_lifetime(&self) -> bool {
        self.lifetime || self.validity.is_unbounded()
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Найти SKU по идентификатору
pub fn find_sku<'a>(skus: &'a [SkuRecord], id: &str) -> Option<&'a SkuRecord> {
    skus.iter().find(|sku| sku.has_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validity_sentinel_round_trip() {
        let record: SkuRecord = serde_json::from_value(json!({
            "_id": "s1",
            "skuName": "Forever",
            "price": 99.0,
            "validity": 9007199254740991u64,
            "lifetime": true
        }))
        .unwrap();
        assert_eq!(record.validity, Validity::Unbounded);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["validity"], json!(9007199254740991u64));
    }

    #[test]
    fn test_validity_accepts_float_days() {
        let v: Validity = serde_json::from_value(json!(60.0)).unwrap();
        assert_eq!(v, Validity::Bounded { days: 60 });
        assert!(serde_json::from_value::<Validity>(json!(-1)).is_err());
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let raw = json!({
            "_id": "s2",
            "skuName": "Monthly",
            "price": 10.5,
            "validity": 30,
            "lifetime": false,
            "stripePriceId": "price_123"
        });
        let record: SkuRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.extra.get("stripePriceId"), Some(&json!("price_123")));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["stripePriceId"], json!("price_123"));
    }

    #[test]
    fn test_null_fields_decode_as_missing() {
        let list: Vec<SkuRecord> = serde_json::from_value(json!([
            {"_id": "a", "skuName": "Ok", "price": 5, "validity": 30, "lifetime": false},
            {"_id": "b", "skuName": null, "price": null, "validity": null, "lifetime": null}
        ]))
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].validity, Validity::Bounded { days: 0 });
        assert_eq!(list[1].price, 0.0);
        assert_eq!(list[1].sku_name, "");
        assert!(!list[1].lifetime);
    }

    #[test]
    fn test_new_record_omits_id() {
        let record = SkuRecord {
            sku_name: "Basic".into(),
            price: 5.0,
            validity: Validity::Bounded { days: 365 },
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["skuName"], json!("Basic"));
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("months".parse::<ValidityUnit>().unwrap(), ValidityUnit::Months);
        assert_eq!("Year".parse::<ValidityUnit>().unwrap(), ValidityUnit::Years);
        assert_eq!("days".parse::<ValidityUnit>().unwrap(), ValidityUnit::Unset);
        assert_eq!("".parse::<ValidityUnit>().unwrap(), ValidityUnit::Unset);
    }

    #[test]
    fn test_find_sku() {
        let skus = vec![
            SkuRecord { id: Some("a".into()), ..Default::default() },
            SkuRecord { id: Some("b".into()), sku_name: "B".into(), ..Default::default() },
        ];
        assert_eq!(find_sku(&skus, "b").map(|s| s.sku_name.as_str()), Some("B"));
        assert!(find_sku(&skus, "c").is_none());
    }
}
