//! User-facing notifications
//!
//! Forms report errors through the [`Notifier`] trait instead of touching
//! the toast system directly. [`ToastNotifier`] renders them with thaw.

use leptos::prelude::*;
use std::time::Duration;
use thaw::*;

/// How long an auto-dismissed toast stays on screen
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Lifetime of a sticky toast
pub const STICKY_TOAST_TIMEOUT: Duration = Duration::from_secs(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyOptions {
    pub kind: NotifyKind,
    pub auto_dismiss: bool,
}

impl NotifyOptions {
    pub fn error() -> Self {
        Self {
            kind: NotifyKind::Error,
            auto_dismiss: true,
        }
    }

    pub fn success() -> Self {
        Self {
            kind: NotifyKind::Success,
            auto_dismiss: true,
        }
    }

    /// Toast stays until the user closes it
    pub fn sticky(self) -> Self {
        Self {
            auto_dismiss: false,
            ..self
        }
    }

    pub fn timeout(&self) -> Duration {
        if self.auto_dismiss {
            AUTO_DISMISS_AFTER
        } else {
            STICKY_TOAST_TIMEOUT
        }
    }
}

pub trait Notifier {
    fn notify(&self, message: &str, options: NotifyOptions);

    fn error(&self, message: &str) {
        self.notify(message, NotifyOptions::error());
    }
}

/// Notifier backed by thaw's toaster. Needs a `ToasterProvider` above it.
#[derive(Clone)]
pub struct ToastNotifier {
    toaster: ToasterInjection,
}

impl ToastNotifier {
    pub fn new(toaster: ToasterInjection) -> Self {
        Self { toaster }
    }

    pub fn from_context() -> Self {
        Self::new(ToasterInjection::expect_context())
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, options: NotifyOptions) {
        let (intent, title) = match options.kind {
            NotifyKind::Error => (ToastIntent::Error, "Ошибка"),
            NotifyKind::Success => (ToastIntent::Success, "Готово"),
        };
        let timeout = options.timeout();
        let body = message.to_string();

        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{title}</ToastTitle>
                        <ToastBody>{body}</ToastBody>
                    </Toast>
                }
            },
            ToastOptions::default()
                .with_intent(intent)
                .with_timeout(timeout),
        );
    }
}
