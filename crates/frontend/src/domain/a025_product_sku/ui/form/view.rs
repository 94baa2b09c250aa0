use super::model::SkuFormEvent;
use super::view_model::{FormPhase, SkuFormVm};
use crate::domain::a025_product_sku::api::CatalogService;
use crate::shared::icons::icon;
use crate::shared::notify::Notifier;
use contracts::domain::a025_product_sku::SkuRecord;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

#[component]
pub fn SkuEntryForm(
    #[prop(into)] product_id: Signal<String>,
    #[prop(into)] skus: Signal<Vec<SkuRecord>>,
    /// Пустая строка — создание нового SKU
    #[prop(into)]
    edit_id: Signal<String>,
    #[prop(into)] on_event: Callback<SkuFormEvent>,
    #[prop(into)] visible: Signal<bool>,
    service: Rc<dyn CatalogService>,
    notifier: Rc<dyn Notifier>,
) -> impl IntoView {
    let vm = SkuFormVm::new(service, notifier);

    // Режим редактирования: подставить значения выбранного SKU
    Effect::new(move || {
        let id = edit_id.get();
        skus.with(|list| vm.prefill(&id, list));
    });

    let phase = Signal::derive(move || {
        FormPhase::resolve(visible.get(), &edit_id.get(), vm.loading.get())
    });
    let period_disabled = vm.is_period_disabled();
    let loading = vm.loading;

    let handle_submit = move |_| {
        vm.submit(
            product_id.get_untracked(),
            edit_id.get_untracked(),
            skus.get_untracked(),
            on_event,
        )
    };

    view! {
        <Show when=move || phase.get() != FormPhase::Closed>
            <Card class="sku-form">
                <h4 class="details-section__title">
                    {move || match phase.get() {
                        FormPhase::OpenEdit => "Редактирование SKU",
                        _ => "Новый SKU",
                    }}
                </h4>

                <div class="details-grid--3col">
                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Наименование SKU *"</label>
                        <Input value=vm.name placeholder="Введите наименование SKU" />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Цена за лицензию *"</label>
                        <Input
                            value=vm.price
                            input_type=InputType::Number
                            placeholder="Введите цену"
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Срок действия"</label>
                        <Input
                            value=vm.validity_amount
                            input_type=InputType::Number
                            disabled=period_disabled
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Единица"</label>
                        <Select value=vm.validity_unit disabled=period_disabled>
                            <option value="">"-- Выберите --"</option>
                            <option value="months">"Месяцы"</option>
                            <option value="years">"Годы"</option>
                        </Select>
                    </div>

                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">
                            <input
                                type="checkbox"
                                role="switch"
                                prop:checked=move || vm.lifetime.get()
                                prop:disabled=move || loading.get()
                                on:change=move |ev| vm.set_lifetime(event_target_checked(&ev))
                            />
                            " Бессрочно"
                        </label>
                        <small class="form__hint">"Отметьте, если лицензия не ограничена по сроку"</small>
                    </div>
                </div>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.cancel(on_event)
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("x")} " Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_submit
                        disabled=Signal::derive(move || loading.get())
                    >
                        <Show
                            when=move || loading.get()
                            fallback=|| icon("save")
                        >
                            <Spinner size=SpinnerSize::Small />
                        </Show>
                        " Сохранить"
                    </Button>
                </div>
            </Card>
        </Show>
    }
}
