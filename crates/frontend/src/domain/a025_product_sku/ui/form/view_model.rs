//! ViewModel for the SKU entry form (EditDetails MVVM Standard)

use super::model::{cancel_events, report_error, run_submit, SkuFormEvent, SubmitError};
use crate::domain::a025_product_sku::api::CatalogService;
use crate::shared::notify::Notifier;
use contracts::domain::a025_product_sku::{find_sku, SkuFormState, SkuRecord, ValidityUnit};
use leptos::prelude::*;
use std::rc::Rc;

/// Состояние формы с точки зрения пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    OpenCreate,
    OpenEdit,
    Submitting,
}

impl FormPhase {
    pub fn resolve(visible: bool, edit_id: &str, loading: bool) -> Self {
        match (visible, loading) {
            (false, _) => FormPhase::Closed,
            (true, true) => FormPhase::Submitting,
            (true, false) if edit_id.is_empty() => FormPhase::OpenCreate,
            (true, false) => FormPhase::OpenEdit,
        }
    }
}

#[derive(Clone, Copy)]
pub struct SkuFormVm {
    // === Form fields (raw input) ===
    pub name: RwSignal<String>,
    pub price: RwSignal<String>,
    pub validity_amount: RwSignal<String>,
    pub validity_unit: RwSignal<String>,
    pub lifetime: RwSignal<bool>,

    // === UI State ===
    pub loading: RwSignal<bool>,

    service: StoredValue<Rc<dyn CatalogService>, LocalStorage>,
    notifier: StoredValue<Rc<dyn Notifier>, LocalStorage>,
}

impl SkuFormVm {
    pub fn new(service: Rc<dyn CatalogService>, notifier: Rc<dyn Notifier>) -> Self {
        let vm = Self {
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            validity_amount: RwSignal::new(String::new()),
            validity_unit: RwSignal::new(String::new()),
            lifetime: RwSignal::new(false),
            loading: RwSignal::new(false),
            service: StoredValue::new_local(service),
            notifier: StoredValue::new_local(notifier),
        };
        vm.reset();
        vm
    }

    // === Derived signals ===

    pub fn is_period_disabled(&self) -> Signal<bool> {
        let lifetime = self.lifetime;
        let loading = self.loading;
        Signal::derive(move || lifetime.get() || loading.get())
    }

    // === State conversion ===

    /// Снимок формы. Нечисловая цена превращается в NaN и не пройдёт валидацию.
    pub fn to_state(&self) -> SkuFormState {
        let price = self.price.get_untracked();
        let price = if price.trim().is_empty() {
            0.0
        } else {
            price.trim().parse::<f64>().unwrap_or(f64::NAN)
        };

        SkuFormState {
            name: self.name.get_untracked(),
            price,
            validity_amount: self
                .validity_amount
                .get_untracked()
                .trim()
                .parse::<u32>()
                .unwrap_or(0),
            validity_unit: self
                .validity_unit
                .get_untracked()
                .parse::<ValidityUnit>()
                .unwrap_or_default(),
            lifetime: self.lifetime.get_untracked(),
        }
    }

    pub fn load_state(&self, state: &SkuFormState) {
        self.name.set(state.name.clone());
        self.price.set(state.price.to_string());
        self.validity_amount.set(state.validity_amount.to_string());
        self.validity_unit.set(state.validity_unit.as_key().to_string());
        self.lifetime.set(state.lifetime);
    }

    pub fn reset(&self) {
        self.load_state(&SkuFormState::default());
    }

    /// Заполнить форму редактируемым SKU
    pub fn prefill(&self, edit_id: &str, skus: &[SkuRecord]) {
        if edit_id.is_empty() {
            return;
        }
        match find_sku(skus, edit_id) {
            Some(record) => self.load_state(&SkuFormState::from_record(record)),
            None => {
                log::warn!("SKU {} not found in product list, using defaults", edit_id);
                self.reset();
            }
        }
    }

    // === Commands ===

    pub fn set_lifetime(&self, lifetime: bool) {
        let mut state = self.to_state();
        state.set_lifetime(lifetime);
        self.lifetime.set(state.lifetime);
        self.validity_amount.set(state.validity_amount.to_string());
        self.validity_unit.set(state.validity_unit.as_key().to_string());
    }

    /// Отмена недоступна, пока запрос в полёте
    pub fn cancel(&self, on_event: Callback<SkuFormEvent>) {
        if self.loading.get_untracked() {
            return;
        }
        self.reset();
        for event in cancel_events() {
            on_event.run(event);
        }
    }

    pub fn submit(
        &self,
        product_id: String,
        edit_id: String,
        skus: Vec<SkuRecord>,
        on_event: Callback<SkuFormEvent>,
    ) {
        if self.loading.get_untracked() {
            return;
        }

        let state = self.to_state();
        if let Err(e) = state.validate() {
            self.notifier
                .with_value(|n| report_error(n.as_ref(), &SubmitError::from(e)));
            return;
        }

        let this = *self;
        let service = self.service.get_value();
        let notifier = self.notifier.get_value();
        this.loading.set(true);

        leptos::task::spawn_local(async move {
            let events = run_submit(
                service.as_ref(),
                notifier.as_ref(),
                &product_id,
                &edit_id,
                &skus,
                &state,
            )
            .await;

            if !events.is_empty() {
                this.reset();
            }
            this.loading.set(false);
            for event in events {
                on_event.run(event);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_product_sku::api::CatalogError;
    use crate::shared::notify::NotifyOptions;
    use async_trait::async_trait;
    use contracts::domain::a025_product_sku::{CreateSkuRequest, Validity};
    use std::cell::{Cell, RefCell};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CountingCatalog {
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl CatalogService for CountingCatalog {
        async fn create_sku(
            &self,
            _product_id: &str,
            _request: CreateSkuRequest,
        ) -> Result<Vec<SkuRecord>, CatalogError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Vec::new())
        }

        async fn update_sku(
            &self,
            _product_id: &str,
            _sku_id: &str,
            _record: SkuRecord,
        ) -> Result<Vec<SkuRecord>, CatalogError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Vec::new())
        }

        async fn list_skus(&self, _product_id: &str) -> Result<Vec<SkuRecord>, CatalogError> {
            Ok(Vec::new())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, _options: NotifyOptions) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn with_vm(test: impl FnOnce(SkuFormVm, Rc<CountingCatalog>, Rc<RecordingNotifier>)) {
        let owner = Owner::new();
        owner.with(|| {
            let catalog = Rc::new(CountingCatalog::default());
            let notifier = Rc::new(RecordingNotifier::default());
            let vm = SkuFormVm::new(catalog.clone(), notifier.clone());
            test(vm, catalog, notifier);
        });
    }

    fn records() -> Vec<SkuRecord> {
        vec![
            SkuRecord {
                id: Some("m".into()),
                sku_name: "Monthly".into(),
                price: 10.0,
                validity: Validity::Bounded { days: 60 },
                ..Default::default()
            },
            SkuRecord {
                id: Some("l".into()),
                sku_name: "Lifetime".into(),
                price: 300.0,
                validity: Validity::Unbounded,
                lifetime: true,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_new_form_has_defaults() {
        with_vm(|vm, _, _| {
            assert_eq!(vm.to_state(), SkuFormState::default());
        });
    }

    #[test]
    fn test_prefill_from_list() {
        with_vm(|vm, _, _| {
            vm.prefill("m", &records());
            let state = vm.to_state();
            assert_eq!(state.name, "Monthly");
            assert_eq!(state.price, 10.0);
            assert_eq!(state.validity_amount, 2);
            assert_eq!(state.validity_unit, ValidityUnit::Months);

            vm.prefill("l", &records());
            assert!(vm.to_state().lifetime);
            assert_eq!(vm.to_state().validity_unit, ValidityUnit::Unset);
        });
    }

    #[test]
    fn test_prefill_unknown_id_uses_defaults() {
        with_vm(|vm, _, _| {
            vm.name.set("typed".into());
            vm.prefill("missing", &records());
            assert_eq!(vm.to_state(), SkuFormState::default());
        });
    }

    #[test]
    fn test_bad_price_is_rejected() {
        with_vm(|vm, _, _| {
            vm.name.set("A".into());
            vm.price.set("abc".into());
            assert!(vm.to_state().price.is_nan());
            assert!(vm.to_state().validate().is_err());
        });
    }

    #[test]
    fn test_set_lifetime_clears_period() {
        with_vm(|vm, _, _| {
            vm.validity_amount.set("3".into());
            vm.validity_unit.set("years".into());
            vm.set_lifetime(true);
            let state = vm.to_state();
            assert!(state.lifetime);
            assert_eq!(state.validity_amount, 0);
            assert_eq!(state.validity_unit, ValidityUnit::Unset);
        });
    }

    #[test]
    fn test_invalid_submit_notifies_without_call() {
        with_vm(|vm, catalog, notifier| {
            let on_event = Callback::new(|_: SkuFormEvent| panic!("no events expected"));
            vm.submit("p1".into(), String::new(), Vec::new(), on_event);

            assert_eq!(catalog.calls.get(), 0);
            assert_eq!(notifier.messages.borrow().len(), 1);
            assert!(!vm.loading.get_untracked());
        });
    }

    #[test]
    fn test_cancel_resets_and_closes() {
        with_vm(|vm, catalog, _| {
            vm.prefill("m", &records());

            let events = Arc::new(Mutex::new(Vec::new()));
            let sink = events.clone();
            let on_event = Callback::new(move |event: SkuFormEvent| {
                sink.lock().unwrap().push(event);
            });
            vm.cancel(on_event);

            assert_eq!(vm.to_state(), SkuFormState::default());
            assert_eq!(catalog.calls.get(), 0);
            assert_eq!(
                *events.lock().unwrap(),
                vec![
                    SkuFormEvent::EditTargetChanged(String::new()),
                    SkuFormEvent::VisibilityChanged(false),
                ]
            );
        });
    }

    #[test]
    fn test_cancel_ignored_while_loading() {
        with_vm(|vm, _, _| {
            vm.name.set("typed".into());
            vm.loading.set(true);
            let on_event = Callback::new(|_: SkuFormEvent| panic!("no events expected"));
            vm.cancel(on_event);
            assert_eq!(vm.name.get_untracked(), "typed");
        });
    }

    #[tokio::test]
    async fn test_submit_single_flight_then_resets() {
        let _ = any_spawner::Executor::init_tokio();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let owner = Owner::new();
                let catalog = Rc::new(CountingCatalog::default());
                let notifier = Rc::new(RecordingNotifier::default());
                let events = Arc::new(Mutex::new(Vec::new()));

                let (vm, on_event) = owner.with(|| {
                    let vm = SkuFormVm::new(catalog.clone(), notifier.clone());
                    vm.name.set("Basic".into());
                    vm.price.set("10".into());
                    vm.validity_amount.set("2".into());
                    vm.validity_unit.set("months".into());

                    let sink = events.clone();
                    let on_event = Callback::new(move |event: SkuFormEvent| {
                        sink.lock().unwrap().push(event);
                    });
                    (vm, on_event)
                });

                vm.submit("p1".into(), String::new(), Vec::new(), on_event);
                assert!(vm.loading.get_untracked());
                vm.submit("p1".into(), String::new(), Vec::new(), on_event);

                for _ in 0..100 {
                    if !vm.loading.get_untracked() {
                        break;
                    }
                    tokio::task::yield_now().await;
                }

                assert_eq!(catalog.calls.get(), 1);
                assert!(!vm.loading.get_untracked());
                assert_eq!(vm.to_state(), SkuFormState::default());
                assert!(notifier.messages.borrow().is_empty());
                assert_eq!(
                    *events.lock().unwrap(),
                    vec![
                        SkuFormEvent::SkusReplaced(Vec::new()),
                        SkuFormEvent::EditTargetChanged(String::new()),
                        SkuFormEvent::VisibilityChanged(false),
                    ]
                );
                drop(owner);
            })
            .await;
    }

    #[test]
    fn test_form_phase() {
        assert_eq!(FormPhase::resolve(false, "x", true), FormPhase::Closed);
        assert_eq!(FormPhase::resolve(true, "", false), FormPhase::OpenCreate);
        assert_eq!(FormPhase::resolve(true, "x", false), FormPhase::OpenEdit);
        assert_eq!(FormPhase::resolve(true, "", true), FormPhase::Submitting);
    }
}
