use super::aggregate::{SkuRecord, Validity, ValidityUnit};
use super::period::{days_to_unit_string, parse_unit_string};
use thiserror::Error;

/// Ошибки формы SKU.
///
/// Намеренно одна общая ошибка: форма не показывает сообщения по полям.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkuFormError {
    #[error("Некорректные данные")]
    InvalidData,
}

/// Состояние формы создания/редактирования SKU
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkuFormState {
    pub name: String,
    pub price: f64,
    pub validity_amount: u32,
    pub validity_unit: ValidityUnit,
    pub lifetime: bool,
}

impl SkuFormState {
    /// Заполнить форму из существующего SKU (режим редактирования)
    pub fn from_record(record: &SkuRecord) -> Self {
        let lifetime = record.is_lifetime();
        let (validity_amount, validity_unit) = match record.validity {
            Validity::Bounded { days } if !lifetime => {
                parse_unit_string(&days_to_unit_string(days))
            }
            _ => (0, ValidityUnit::Unset),
        };

        Self {
            name: record.sku_name.clone(),
            price: record.price,
            validity_amount,
            validity_unit,
            lifetime,
        }
    }

    /// Переключатель "бессрочно": в обе стороны сбрасывает срок
    pub fn set_lifetime(&mut self, lifetime: bool) {
        self.lifetime = lifetime;
        self.validity_amount = 0;
        self.validity_unit = ValidityUnit::Unset;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), SkuFormError> {
        if self.name.is_empty() || self.price == 0.0 || self.price.is_nan() {
            return Err(SkuFormError::InvalidData);
        }
        if !self.lifetime && self.validity_amount == 0 {
            return Err(SkuFormError::InvalidData);
        }
        if !self.lifetime && !self.validity_unit.is_set() {
            return Err(SkuFormError::InvalidData);
        }
        Ok(())
    }

    /// Срок в днях после валидации
    pub fn validity(&self) -> Result<Validity, SkuFormError> {
        if self.lifetime {
            return Ok(Validity::Unbounded);
        }
        let per_unit = self
            .validity_unit
            .days_per_unit()
            .ok_or(SkuFormError::InvalidData)?;
        Ok(Validity::days(u64::from(self.validity_amount) * per_unit))
    }

    /// Построить запись для отправки в каталог.
    ///
    /// `base` — исходный SKU в режиме редактирования; его id и неизвестные
    /// форме поля переносятся в результат. Состояние формы не меняется.
    pub fn normalize(&self, base: Option<&SkuRecord>) -> Result<SkuRecord, SkuFormError> {
        self.validate()?;
        let validity = self.validity()?;

        let mut record = base.cloned().unwrap_or_default();
        record.sku_name = self.name.clone();
        record.price = self.price;
        record.validity = validity;
        record.lifetime = self.lifetime;
        Ok(record)
    }
}
