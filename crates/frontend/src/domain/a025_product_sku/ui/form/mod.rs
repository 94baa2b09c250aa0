//! SKU entry form
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: submit pipeline (validate, call catalog, report errors)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

pub mod model;
mod view;
mod view_model;

pub use model::SkuFormEvent;
pub use view::SkuEntryForm;
pub use view_model::{FormPhase, SkuFormVm};
