use super::ProductSkuPanel;
use crate::domain::a025_product_sku::api::{CatalogService, HttpCatalogService};
use crate::shared::icons::icon;
use crate::shared::notify::{Notifier, NotifyOptions, ToastNotifier};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a025_product_sku::SkuRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use std::rc::Rc;
use thaw::*;

/// Страница SKU продукта: `/products/:product_id/skus`
#[component]
pub fn ProductSkuPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = Signal::derive(move || params.read().get("product_id").unwrap_or_default());

    let service: Rc<dyn CatalogService> = Rc::new(HttpCatalogService::default());
    let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::from_context());
    let stored_service = StoredValue::new_local(service);
    let stored_notifier = StoredValue::new_local(notifier);

    let skus = RwSignal::new(Vec::<SkuRecord>::new());
    let (loading, set_loading) = signal(false);

    let load = move || {
        let id = product_id.get_untracked();
        if id.is_empty() {
            return;
        }
        let service = stored_service.get_value();
        let notifier = stored_notifier.get_value();
        set_loading.set(true);

        spawn_local(async move {
            match service.list_skus(&id).await {
                Ok(list) => skus.set(list),
                Err(e) => {
                    log::error!("Failed to load SKUs of product {}: {}", id, e);
                    notifier.notify(
                        &format!("Ошибка загрузки: {}", e),
                        NotifyOptions::error().sticky(),
                    );
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move || {
        product_id.track();
        load();
    });

    view! {
        <PageFrame page_id="a025_product_sku--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("products")}
                    <h1 class="page__title">
                        {move || format!("SKU продукта {}", product_id.get())}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")} " Обновить"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || loading.get()>
                    <Spinner />
                </Show>

                <ProductSkuPanel
                    product_id=product_id
                    skus=skus
                    service=stored_service.get_value()
                    notifier=stored_notifier.get_value()
                />
            </div>
        </PageFrame>
    }
}
