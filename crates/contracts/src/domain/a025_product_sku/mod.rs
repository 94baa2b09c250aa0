pub mod aggregate;
pub mod dto;
pub mod form;
pub mod period;

pub use aggregate::{find_sku, SkuRecord, Validity, ValidityUnit, UNBOUNDED_VALIDITY_DAYS};
pub use dto::{CreateSkuRequest, ServiceMessage, SkuDetailsResult, SkuServiceResponse};
pub use form::{SkuFormError, SkuFormState};
