//! Submit pipeline of the SKU form, free of reactive state.
//!
//! The view model feeds a snapshot of the form in and dispatches the returned
//! [`SkuFormEvent`]s to the parent.

use crate::domain::a025_product_sku::api::{CatalogError, CatalogService};
use crate::shared::notify::Notifier;
use contracts::domain::a025_product_sku::{
    find_sku, CreateSkuRequest, SkuFormError, SkuFormState, SkuRecord,
};
use thiserror::Error;

/// Показывается, если каталог отказал без объяснения причин
pub const GENERIC_FAILURE_MESSAGE: &str = "Не удалось сохранить SKU";

/// Запросы формы к родительскому компоненту
#[derive(Debug, Clone, PartialEq)]
pub enum SkuFormEvent {
    /// Заменить список SKU ответом сервера
    SkusReplaced(Vec<SkuRecord>),
    /// Сменить редактируемый SKU; пустая строка — режим создания
    EditTargetChanged(String),
    VisibilityChanged(bool),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] SkuFormError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl SubmitError {
    /// Сообщения для уведомлений; никогда не пустой список
    pub fn messages(&self) -> Vec<String> {
        let messages: Vec<String> = match self {
            SubmitError::Invalid(e) => vec![e.to_string()],
            SubmitError::Catalog(e) => e.messages(),
        }
        .into_iter()
        .filter(|m| !m.trim().is_empty())
        .collect();

        if messages.is_empty() {
            vec![GENERIC_FAILURE_MESSAGE.to_string()]
        } else {
            messages
        }
    }
}

/// Проверить форму и отправить её в каталог.
///
/// `edit_id` пустой — создание, иначе обновление SKU с этим id.
/// При ошибке валидации каталог не вызывается.
pub async fn submit_sku(
    service: &dyn CatalogService,
    product_id: &str,
    edit_id: &str,
    skus: &[SkuRecord],
    state: &SkuFormState,
) -> Result<Vec<SkuRecord>, SubmitError> {
    if edit_id.is_empty() {
        let record = state.normalize(None)?;
        log::debug!("creating SKU '{}' for product {}", record.sku_name, product_id);
        let list = service
            .create_sku(product_id, CreateSkuRequest::single(record))
            .await?;
        Ok(list)
    } else {
        let record = state.normalize(find_sku(skus, edit_id))?;
        log::debug!("updating SKU {} of product {}", edit_id, product_id);
        let list = service.update_sku(product_id, edit_id, record).await?;
        Ok(list)
    }
}

/// Одно уведомление на каждое сообщение ошибки
pub fn report_error(notifier: &dyn Notifier, error: &SubmitError) {
    for message in error.messages() {
        notifier.error(&message);
    }
}

/// События родителю после успешного сохранения
pub fn saved_events(list: Vec<SkuRecord>) -> Vec<SkuFormEvent> {
    vec![
        SkuFormEvent::SkusReplaced(list),
        SkuFormEvent::EditTargetChanged(String::new()),
        SkuFormEvent::VisibilityChanged(false),
    ]
}

/// События родителю при отмене
pub fn cancel_events() -> Vec<SkuFormEvent> {
    vec![
        SkuFormEvent::EditTargetChanged(String::new()),
        SkuFormEvent::VisibilityChanged(false),
    ]
}

/// Полный цикл отправки: сохранить, при ошибке уведомить.
///
/// Возвращает события для родителя; при ошибке список пуст и форма
/// остаётся открытой.
pub async fn run_submit(
    service: &dyn CatalogService,
    notifier: &dyn Notifier,
    product_id: &str,
    edit_id: &str,
    skus: &[SkuRecord],
    state: &SkuFormState,
) -> Vec<SkuFormEvent> {
    match submit_sku(service, product_id, edit_id, skus, state).await {
        Ok(list) => saved_events(list),
        Err(error) => {
            log::warn!("SKU submit failed: {}", error);
            report_error(notifier, &error);
            Vec::new()
        }
    }
}
