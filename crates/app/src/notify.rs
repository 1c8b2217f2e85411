use client::Notifier;
use dioxus::prelude::*;
use shared_types::RegistryError;
use shared_ui::{use_toast, ToastOptions};
use tokio::sync::mpsc;

/// A message queued for the toast area.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Routes list and mutation outcomes of one screen into its toast queue.
#[derive(Debug, Clone)]
pub struct ToastNotifier(mpsc::UnboundedSender<Notice>);

impl ToastNotifier {
    pub fn success(&self, message: impl Into<String>) {
        self.push(Notice::Success(message.into()));
    }

    pub fn error(&self, error: &RegistryError) {
        self.push(Notice::Error(error.user_message()));
    }

    pub fn failure(&self, message: impl Into<String>) {
        self.push(Notice::Error(message.into()));
    }

    fn push(&self, notice: Notice) {
        if self.0.send(notice).is_err() {
            tracing::debug!("Toast queue closed; screen already unmounted");
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, error: &RegistryError) {
        self.error(error);
    }
}

/// Start forwarding notices to the toast provider for the current scope.
///
/// The forwarding task ends with the scope that called this.
pub fn use_toast_queue() -> ToastNotifier {
    let toast = use_toast();
    use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded_channel::<Notice>();
        spawn(async move {
            while let Some(notice) = rx.recv().await {
                match notice {
                    Notice::Success(message) => {
                        toast.success(message, ToastOptions::new());
                    }
                    Notice::Error(message) => {
                        toast.error(message, ToastOptions::new());
                    }
                }
            }
        });
        ToastNotifier(tx)
    })
}
