use crate::domain::a025_product_sku::ui::panel::ProductSkuPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__content">
                <h1 class="page__title">"Страница не найдена"</h1>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/products/:product_id/skus") view=ProductSkuPage />
            </Routes>
        </Router>
    }
}
