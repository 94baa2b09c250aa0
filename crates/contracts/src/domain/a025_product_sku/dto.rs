use super::aggregate::SkuRecord;
use serde::{Deserialize, Serialize};

/// Тело запроса на создание SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSkuRequest {
    #[serde(rename = "skuDetails")]
    pub sku_details: Vec<SkuRecord>,
}

impl CreateSkuRequest {
    pub fn single(record: SkuRecord) -> Self {
        Self {
            sku_details: vec![record],
        }
    }
}

/// Сообщение каталога: одна строка или список
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceMessage {
    One(String),
    Many(Vec<String>),
}

impl ServiceMessage {
    pub fn into_messages(self) -> Vec<String> {
        match self {
            ServiceMessage::One(message) => vec![message],
            ServiceMessage::Many(messages) => messages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkuDetailsResult {
    #[serde(rename = "skuDetails", default)]
    pub sku_details: Vec<SkuRecord>,
}

/// Ответ каталога на создание/обновление/чтение SKU
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkuServiceResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ServiceMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<SkuDetailsResult>,
}

impl SkuServiceResponse {
    /// Сообщения ответа без пустых строк
    pub fn messages(&self) -> Vec<String> {
        self.message
            .clone()
            .map(ServiceMessage::into_messages)
            .unwrap_or_default()
            .into_iter()
            .filter(|m| !m.trim().is_empty())
            .collect()
    }
}
