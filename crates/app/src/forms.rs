use std::collections::HashMap;

use client::{FilePart, RegistryClient};
use dioxus::prelude::*;
use shared_types::{current_year, year_options, AttachmentSpec, RegistryError, Resource};
use shared_ui::{FileInput, FormSelect, FormSheet, SelectOption};
use validator::Validate;

use crate::hooks::ResourceList;
use crate::notify::{use_toast_queue, ToastNotifier};
use crate::Registry;

pub const SAVED_MESSAGE: &str = "Data berhasil disimpan";
pub const NOT_FOUND_MESSAGE: &str = "Data tidak ditemukan";

/// Create/edit sheet state for one list screen.
///
/// The draft is the record itself; field components write into it through
/// [`RecordForm::edit`]. Like [`ResourceList`] the handle is `Copy`.
pub struct RecordForm<R: Resource> {
    pub draft: Signal<R>,
    pub open: Signal<bool>,
    pub loading: Signal<bool>,
    pub saving: Signal<bool>,
    editing: Signal<bool>,
    errors: Signal<HashMap<String, String>>,
    files: Signal<Vec<FilePart>>,
    client: Signal<RegistryClient>,
    notices: Signal<ToastNotifier>,
}

impl<R: Resource> Clone for RecordForm<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for RecordForm<R> {}

impl<R: Resource> PartialEq for RecordForm<R> {
    fn eq(&self, other: &Self) -> bool {
        self.draft == other.draft
    }
}

pub fn use_record_form<R: Resource + Default>() -> RecordForm<R> {
    let registry = use_context::<Registry>();
    let notices = use_toast_queue();

    use_hook(move || RecordForm {
        draft: Signal::new(R::default()),
        open: Signal::new(false),
        loading: Signal::new(false),
        saving: Signal::new(false),
        editing: Signal::new(false),
        errors: Signal::new(HashMap::new()),
        files: Signal::new(Vec::new()),
        client: Signal::new(registry.client),
        notices: Signal::new(notices),
    })
}

impl<R: Resource> RecordForm<R> {
    /// Whether the sheet edits a stored record, also while it is loading.
    pub fn is_editing(&self) -> bool {
        *self.editing.read()
    }

    fn reset(&self, record: R) {
        let (mut draft, mut errors, mut files) = (self.draft, self.errors, self.files);
        draft.set(record);
        errors.set(HashMap::new());
        files.set(Vec::new());
    }

    /// Open an empty sheet prefilled with `record`.
    pub fn open_create(&self, record: R) {
        let (mut open, mut loading, mut editing) = (self.open, self.loading, self.editing);
        self.reset(record);
        editing.set(false);
        loading.set(false);
        open.set(true);
    }

    /// Open the sheet and fetch the current version of record `id`.
    pub fn open_edit(&self, id: Option<i64>)
    where
        R: Default,
    {
        let Some(id) = id else {
            return;
        };
        let (mut open, mut loading, mut draft) = (self.open, self.loading, self.draft);
        let mut editing = self.editing;
        let client = self.client.peek().clone();
        let notices = self.notices.peek().clone();

        self.reset(R::default());
        editing.set(true);
        loading.set(true);
        open.set(true);
        spawn(async move {
            match client.get::<R>(id).await {
                Ok(Some(record)) => draft.set(record),
                Ok(None) => {
                    tracing::warn!(resource = R::PATH, id, "Record to edit no longer exists");
                    notices.failure(NOT_FOUND_MESSAGE);
                    open.set(false);
                }
                Err(e) => {
                    notices.error(&e);
                    open.set(false);
                }
            }
            loading.set(false);
        });
    }

    pub fn close(&self) {
        let mut open = self.open;
        if !*self.saving.peek() {
            open.set(false);
        }
    }

    /// Apply `change` to the draft.
    pub fn edit(&self, change: impl FnOnce(&mut R)) {
        let mut draft = self.draft;
        draft.with_mut(change);
    }

    /// Validation message for `field` from the last submit.
    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.read().get(field).cloned()
    }

    pub fn show_errors(&self, field_errors: HashMap<String, String>) {
        let mut errors = self.errors;
        errors.set(field_errors);
    }

    pub fn attach(&self, field: &str, file_name: String, bytes: Vec<u8>) {
        let mut files = self.files;
        replace_file(
            &mut files.write(),
            FilePart {
                field: field.to_string(),
                file_name,
                bytes,
            },
        );
    }

    /// Name of the file picked for `field`, if any.
    pub fn attached(&self, field: &str) -> Option<String> {
        self.files
            .read()
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.file_name.clone())
    }

    /// Validate the draft locally, then create or update it. On success the
    /// sheet closes and `on_saved` runs; field errors stay on the sheet.
    pub fn submit(&self, on_saved: impl FnOnce() + 'static) {
        let record = self.draft.peek().clone();
        if let Err(e) = record.validate() {
            self.show_errors(RegistryError::from(e).field_errors());
            return;
        }

        let form = *self;
        let (mut saving, mut open) = (self.saving, self.open);
        let client = self.client.peek().clone();
        let notices = self.notices.peek().clone();
        let files = self.files.peek().clone();

        self.show_errors(HashMap::new());
        saving.set(true);
        spawn(async move {
            match client.save(&record, files).await {
                Ok(_) => {
                    tracing::info!(resource = R::PATH, id = ?record.id(), "Record saved");
                    notices.success(SAVED_MESSAGE);
                    saving.set(false);
                    open.set(false);
                    on_saved();
                }
                Err(e) => {
                    tracing::warn!(resource = R::PATH, error = %e, "Save failed");
                    form.show_errors(e.field_errors());
                    notices.error(&e);
                    saving.set(false);
                }
            }
        });
    }

    /// The sheet around `fields`; a successful save refreshes `list`.
    pub fn sheet(&self, list: ResourceList<R>, noun: &str, fields: Element) -> Element {
        let form = *self;
        rsx! {
            FormSheet {
                open: *self.open.read(),
                title: form_title(noun, self.is_editing()),
                busy: *self.saving.read(),
                loading: *self.loading.read(),
                on_close: move |_| form.close(),
                on_submit: move |_| form.submit(move || list.refresh()),
                {fields}
            }
        }
    }
}

/// Keep at most one file per field; a new pick replaces the old one.
pub fn replace_file(files: &mut Vec<FilePart>, part: FilePart) {
    files.retain(|f| f.field != part.field);
    files.push(part);
}

pub fn form_title(noun: &str, editing: bool) -> String {
    if editing {
        format!("Edit {noun}")
    } else {
        format!("Tambah {noun}")
    }
}

/// Text input value for an optional field.
pub fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Blank input clears an optional field, so `url` rules never see "".
pub fn text_opt(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Rupiah amount typed into a number input; unparsable text counts as 0.
pub fn parse_amount(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Number input text for an amount; whole rupiah without a decimal point.
pub fn amount_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Year dropdown for forms; unlike the filter it has no "all" entry.
#[component]
pub fn YearField(label: String, value: i32, onchange: EventHandler<i32>) -> Element {
    let registry = use_context::<Registry>();
    let mut years = year_options(current_year(), registry.settings.year_floor);
    if value > 0 && !years.contains(&value) {
        years.push(value);
    }
    let options: Vec<SelectOption> = years
        .into_iter()
        .map(|year| SelectOption::new(year, year.to_string()))
        .collect();

    rsx! {
        FormSelect {
            label,
            value: value.to_string(),
            options,
            onchange: move |v: String| {
                if let Ok(year) = v.parse() {
                    onchange.call(year);
                }
            },
        }
    }
}

/// File picker bound to one attachment field of the form.
#[component]
pub fn AttachmentField<R: Resource + Default>(
    form: RecordForm<R>,
    spec: AttachmentSpec,
    #[props(default)] current: Option<String>,
) -> Element {
    rsx! {
        FileInput {
            label: spec.label.to_string(),
            accept: spec.accept.to_string(),
            selected: form.attached(spec.field),
            current,
            on_pick: move |(name, bytes): (String, Vec<u8>)| form.attach(spec.field, name, bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn part(field: &str, name: &str) -> FilePart {
        FilePart {
            field: field.to_string(),
            file_name: name.to_string(),
            bytes: b"%PDF".to_vec(),
        }
    }

    #[test]
    fn new_pick_replaces_file_of_same_field() {
        let mut files = vec![part("file_doc_dipa", "dipa-lama.pdf"), part("file_doc_pok", "pok.pdf")];
        replace_file(&mut files, part("file_doc_dipa", "dipa-baru.pdf"));

        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["pok.pdf", "dipa-baru.pdf"]);
    }

    #[test]
    fn blank_optional_text_becomes_none() {
        assert_eq!(text_opt("   ".to_string()), None);
        assert_eq!(text_opt("Jl. Merdeka 1".to_string()), Some("Jl. Merdeka 1".to_string()));
        assert_eq!(opt_text(&None), "");
    }

    #[test]
    fn amounts_fall_back_to_zero() {
        assert_eq!(parse_amount("1500000"), 1_500_000.0);
        assert_eq!(parse_amount(" 2500.5 "), 2500.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn whole_amounts_have_no_decimals() {
        assert_eq!(amount_text(1_500_000.0), "1500000");
        assert_eq!(amount_text(2500.5), "2500.5");
        assert_eq!(amount_text(0.0), "0");
    }

    #[test]
    fn title_follows_mode() {
        assert_eq!(form_title("Agenda Pimpinan", false), "Tambah Agenda Pimpinan");
        assert_eq!(form_title("Agenda Pimpinan", true), "Edit Agenda Pimpinan");
    }
}
