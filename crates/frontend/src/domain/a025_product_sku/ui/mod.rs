pub mod form;
pub mod panel;
