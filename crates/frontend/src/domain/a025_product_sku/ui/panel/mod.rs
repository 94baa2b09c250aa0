//! SKU list of a product with the entry form.
//!
//! The panel owns the list, the edit target and form visibility; the form
//! only asks for changes through [`SkuFormEvent`].

mod page;

pub use page::ProductSkuPage;

use crate::domain::a025_product_sku::api::CatalogService;
use crate::domain::a025_product_sku::ui::form::{SkuEntryForm, SkuFormEvent};
use crate::shared::icons::icon;
use crate::shared::notify::{Notifier, NotifyOptions};
use contracts::domain::a025_product_sku::{SkuRecord, Validity};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

/// Строка таблицы SKU
#[derive(Clone, Debug, PartialEq)]
pub struct SkuRow {
    pub id: String,
    pub name: String,
    pub price: String,
    pub validity: String,
}

impl From<&SkuRecord> for SkuRow {
    fn from(sku: &SkuRecord) -> Self {
        let validity = if sku.is_lifetime() {
            Validity::Unbounded
        } else {
            sku.validity
        };

        Self {
            id: sku.id.clone().unwrap_or_default(),
            name: sku.sku_name.clone(),
            price: format!("{:.2}", sku.price),
            validity: validity.label(),
        }
    }
}

/// Применить событие формы к состоянию панели
pub fn apply_form_event(
    event: SkuFormEvent,
    skus: RwSignal<Vec<SkuRecord>>,
    edit_id: RwSignal<String>,
    form_visible: RwSignal<bool>,
) {
    match event {
        SkuFormEvent::SkusReplaced(list) => skus.set(list),
        SkuFormEvent::EditTargetChanged(id) => edit_id.set(id),
        SkuFormEvent::VisibilityChanged(visible) => form_visible.set(visible),
    }
}

#[component]
pub fn ProductSkuPanel(
    #[prop(into)] product_id: Signal<String>,
    skus: RwSignal<Vec<SkuRecord>>,
    service: Rc<dyn CatalogService>,
    notifier: Rc<dyn Notifier>,
) -> impl IntoView {
    let edit_id = RwSignal::new(String::new());
    let form_visible = RwSignal::new(false);

    let service = StoredValue::new_local(service);
    let notifier = StoredValue::new_local(notifier);

    let on_event = Callback::new(move |event: SkuFormEvent| {
        if matches!(event, SkuFormEvent::SkusReplaced(_)) {
            notifier.with_value(|n| n.notify("SKU сохранён", NotifyOptions::success()));
        }
        apply_form_event(event, skus, edit_id, form_visible);
    });

    let open_create = move |_| {
        edit_id.set(String::new());
        form_visible.set(true);
    };

    let rows = move || skus.with(|list| list.iter().map(SkuRow::from).collect::<Vec<_>>());

    view! {
        <div class="sku-panel">
            <div class="sku-panel__header">
                <h3>"SKU"</h3>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=open_create
                    disabled=Signal::derive(move || form_visible.get())
                >
                    {icon("plus")} " Добавить SKU"
                </Button>
            </div>

            <SkuEntryForm
                product_id=product_id
                skus=skus
                edit_id=edit_id
                on_event=on_event
                visible=form_visible
                service=service.get_value()
                notifier=notifier.get_value()
            />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Наименование"</TableHeaderCell>
                        <TableHeaderCell>"Цена"</TableHeaderCell>
                        <TableHeaderCell>"Срок"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = rows();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell>"Нет SKU"</TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let id = row.id.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{row.name}</TableCell>
                                        <TableCell>{row.price}</TableCell>
                                        <TableCell>{row.validity}</TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| {
                                                    edit_id.set(id.clone());
                                                    form_visible.set(true);
                                                }
                                            >
                                                {icon("edit")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_labels() {
        let row = SkuRow::from(&SkuRecord {
            id: Some("1".into()),
            sku_name: "Quarter".into(),
            price: 30.0,
            validity: Validity::Bounded { days: 90 },
            ..Default::default()
        });
        assert_eq!(row.price, "30.00");
        assert_eq!(row.validity, "3 months");

        let row = SkuRow::from(&SkuRecord {
            lifetime: true,
            validity: Validity::Bounded { days: 0 },
            ..Default::default()
        });
        assert_eq!(row.validity, Validity::Unbounded.label());
    }

    #[test]
    fn test_successful_edit_updates_parent_state() {
        let owner = Owner::new();
        owner.with(|| {
            let skus = RwSignal::new(vec![SkuRecord::default()]);
            let edit_id = RwSignal::new("sku-1".to_string());
            let form_visible = RwSignal::new(true);
            let server_list = vec![
                SkuRecord { id: Some("sku-1".into()), ..Default::default() },
                SkuRecord { id: Some("sku-2".into()), ..Default::default() },
            ];

            for event in crate::domain::a025_product_sku::ui::form::model::saved_events(
                server_list.clone(),
            ) {
                apply_form_event(event, skus, edit_id, form_visible);
            }

            assert_eq!(skus.get_untracked(), server_list);
            assert_eq!(edit_id.get_untracked(), "");
            assert!(!form_visible.get_untracked());
        });
    }
}
