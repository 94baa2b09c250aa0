use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // ToasterProvider backs shared::notify::ToastNotifier
    view! {
        <ConfigProvider>
            <ToasterProvider>
                <AppRoutes />
            </ToasterProvider>
        </ConfigProvider>
    }
}
