use async_trait::async_trait;
use contracts::domain::a025_product_sku::{CreateSkuRequest, SkuRecord, SkuServiceResponse};
use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::shared::api_utils::{api_base, api_url};

const PRODUCTS_PREFIX: &str = "/api/products";

/// Ошибки обращения к каталогу
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Каталог ответил `success: false` или вернул сообщения в теле ошибки
    #[error("{}", .0.join("; "))]
    Rejected(Vec<String>),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Response has no SKU list")]
    MalformedResponse,
}

impl CatalogError {
    /// Сообщения для показа пользователю, по одному на уведомление
    pub fn messages(&self) -> Vec<String> {
        match self {
            CatalogError::Rejected(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Каталог продуктов: хранение SKU
#[async_trait(?Send)]
pub trait CatalogService {
    async fn create_sku(
        &self,
        product_id: &str,
        request: CreateSkuRequest,
    ) -> Result<Vec<SkuRecord>, CatalogError>;

    async fn update_sku(
        &self,
        product_id: &str,
        sku_id: &str,
        record: SkuRecord,
    ) -> Result<Vec<SkuRecord>, CatalogError>;

    async fn list_skus(&self, product_id: &str) -> Result<Vec<SkuRecord>, CatalogError>;
}

/// Разобрать ответ каталога в список SKU
pub fn into_sku_list(response: SkuServiceResponse) -> Result<Vec<SkuRecord>, CatalogError> {
    if !response.success {
        return Err(CatalogError::Rejected(response.messages()));
    }
    response
        .result
        .map(|r| r.sku_details)
        .ok_or(CatalogError::MalformedResponse)
}

/// HTTP-клиент каталога
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    base: String,
}

impl HttpCatalogService {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, segments: &[&str]) -> String {
        api_url(&self.base, PRODUCTS_PREFIX, segments)
    }
}

impl Default for HttpCatalogService {
    fn default() -> Self {
        Self::new(api_base())
    }
}

async fn read_response(response: Response) -> Result<Vec<SkuRecord>, CatalogError> {
    if !response.ok() {
        let status = response.status();
        // Тело ошибки часто содержит message — показываем его, если есть
        return match response.json::<SkuServiceResponse>().await {
            Ok(body) if !body.messages().is_empty() => {
                Err(CatalogError::Rejected(body.messages()))
            }
            _ => Err(CatalogError::Http { status }),
        };
    }

    let body = response
        .json::<SkuServiceResponse>()
        .await
        .map_err(|e| CatalogError::Decode(e.to_string()))?;
    into_sku_list(body)
}

#[async_trait(?Send)]
impl CatalogService for HttpCatalogService {
    async fn create_sku(
        &self,
        product_id: &str,
        request: CreateSkuRequest,
    ) -> Result<Vec<SkuRecord>, CatalogError> {
        let response = Request::post(&self.url(&[product_id, "skus"]))
            .json(&request)
            .map_err(|e| CatalogError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        read_response(response).await
    }

    async fn update_sku(
        &self,
        product_id: &str,
        sku_id: &str,
        record: SkuRecord,
    ) -> Result<Vec<SkuRecord>, CatalogError> {
        let response = Request::put(&self.url(&[product_id, "skus", sku_id]))
            .json(&record)
            .map_err(|e| CatalogError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        read_response(response).await
    }

    async fn list_skus(&self, product_id: &str) -> Result<Vec<SkuRecord>, CatalogError> {
        let response = Request::get(&self.url(&[product_id, "skus"]))
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        read_response(response).await
    }
}
