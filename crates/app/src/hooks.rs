use client::{ListController, ListState, RegistryClient, ResourceSource};
use dioxus::prelude::*;
use shared_types::{current_year, Resource};
use shared_ui::ConfirmDeleteDialog;

use crate::notify::{use_toast_queue, ToastNotifier};
use crate::Registry;

/// A record waiting for delete confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub id: i64,
    pub subject: String,
}

/// Handle a list screen uses to read its state and drive its controller.
///
/// Every field is a signal, so the handle is `Copy` and can be moved into
/// as many event handlers as the screen needs.
pub struct ResourceList<R: Resource> {
    pub state: Signal<ListState<R>>,
    pub pending_delete: Signal<Option<PendingDelete>>,
    pub deleting: Signal<bool>,
    controller: Signal<ListController<R, ResourceSource<R>>>,
    client: Signal<RegistryClient>,
    notices: Signal<ToastNotifier>,
}

impl<R: Resource> Clone for ResourceList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceList<R> {}

/// Mount a [`ListController`] for `R` and load its first page.
///
/// Snapshots from the controller are mirrored into `state`; failed fetches
/// land in the toast area once each.
pub fn use_resource_list<R: Resource>() -> ResourceList<R> {
    let registry = use_context::<Registry>();
    let notices = use_toast_queue();

    use_hook(move || {
        let controller = ListController::<R, ResourceSource<R>>::for_resource(
            registry.client.clone(),
            registry.settings,
            current_year(),
            notices.clone(),
        );

        let mut state = Signal::new(controller.state());
        let mut updates = controller.subscribe();
        spawn(async move {
            while updates.changed().await.is_ok() {
                let snapshot = updates.borrow_and_update().clone();
                state.set(snapshot);
            }
        });

        let initial = controller.clone();
        spawn(async move {
            initial.load().await;
        });

        ResourceList {
            state,
            pending_delete: Signal::new(None),
            deleting: Signal::new(false),
            controller: Signal::new(controller),
            client: Signal::new(registry.client),
            notices: Signal::new(notices),
        }
    })
}

impl<R: Resource> ResourceList<R> {
    fn controller(&self) -> ListController<R, ResourceSource<R>> {
        self.controller.peek().clone()
    }

    /// Current value of a select filter, `"all"` when unset.
    pub fn filter_value(&self, name: &str) -> String {
        self.state.read().filters.select_value(name)
    }

    pub fn set_filter(&self, name: &'static str, value: String) {
        let controller = self.controller();
        spawn(async move {
            controller.set_filter(name, value).await;
        });
    }

    pub fn go_to_page(&self, page: i64) {
        let controller = self.controller();
        let notices = self.notices.peek().clone();
        spawn(async move {
            if let Err(e) = controller.go_to_page(page).await {
                tracing::warn!(page, error = %e, "Page navigation rejected");
                notices.error(&e);
            }
        });
    }

    pub fn refresh(&self) {
        let controller = self.controller();
        spawn(async move {
            controller.refresh().await;
        });
    }

    /// Open the confirmation dialog for a record. Records without an id are
    /// not persisted yet and cannot be deleted.
    pub fn ask_delete(&self, id: Option<i64>, subject: impl Into<String>) {
        let mut pending = self.pending_delete;
        if let Some(id) = id {
            pending.set(Some(PendingDelete {
                id,
                subject: subject.into(),
            }));
        }
    }

    pub fn cancel_delete(&self) {
        let mut pending = self.pending_delete;
        if !*self.deleting.peek() {
            pending.set(None);
        }
    }

    /// Delete the pending record and refresh the current page on success.
    pub fn confirm_delete(&self) {
        let Some(target) = self.pending_delete.peek().clone() else {
            return;
        };
        let client = self.client.peek().clone();
        let controller = self.controller();
        let notices = self.notices.peek().clone();
        let mut deleting = self.deleting;
        let mut pending = self.pending_delete;

        deleting.set(true);
        spawn(async move {
            match client.delete::<R>(target.id).await {
                Ok(()) => {
                    notices.success("Data berhasil dihapus");
                    controller.refresh().await;
                }
                Err(e) => {
                    tracing::warn!(resource = R::PATH, id = target.id, error = %e, "Delete failed");
                    notices.error(&e);
                }
            }
            deleting.set(false);
            pending.set(None);
        });
    }

    /// Confirmation dialog bound to `pending_delete`.
    pub fn delete_dialog(&self) -> Element {
        let list = *self;
        let subject = self
            .pending_delete
            .read()
            .as_ref()
            .map(|p| p.subject.clone())
            .unwrap_or_default();

        rsx! {
            ConfirmDeleteDialog {
                open: self.pending_delete.read().is_some(),
                subject,
                busy: *self.deleting.read(),
                on_open_change: move |open: bool| {
                    if !open {
                        list.cancel_delete();
                    }
                },
                on_confirm: move |_| list.confirm_delete(),
            }
        }
    }
}
