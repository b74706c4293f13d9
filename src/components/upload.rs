//! Upload form: the two CSV file slots and the submit button.
//!
//! Handles file selection, client-side validation and the transition
//! into the loading phase.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::services::request_charts;
use crate::types::{SlotKind, UiPhase};
use crate::{BACKEND_URL, CSV_MIME, MAX_FILE_SIZE};

/// Check a selection against the declared MIME type and size limit.
///
/// Advisory only: the browser-reported type is trusted and the file is
/// never opened. Returns the field-level message on rejection.
pub fn validate_selection(mime: &str, size: u64) -> Result<(), String> {
    if mime != CSV_MIME {
        return Err(format!("Only CSV files are accepted (got \"{}\").", mime));
    }
    if size > MAX_FILE_SIZE {
        return Err(format!(
            "File is too large ({} bytes, limit is {} bytes).",
            size, MAX_FILE_SIZE
        ));
    }
    Ok(())
}

/// Take the first file out of an input change event and validate it.
///
/// On rejection the input element is cleared so the browser does not
/// keep showing the bad file name, the slot error is set, and any
/// previously accepted file stays in the slot untouched.
fn pick_file(
    ev: &Event,
    slot: WriteSignal<Option<web_sys::File>>,
    slot_error: WriteSignal<Option<String>>,
) {
    let input: HtmlInputElement = event_target(ev);
    let Some(files) = input.files() else { return };
    let Some(file) = files.get(0) else { return };

    match validate_selection(&file.type_(), file.size() as u64) {
        Ok(()) => {
            slot_error.set(None);
            slot.set(Some(file));
        }
        Err(msg) => {
            input.set_value("");
            slot_error.set(Some(msg));
        }
    }
}

#[component]
pub fn UploadForm(set_phase: WriteSignal<UiPhase>) -> impl IntoView {
    let (export_file, set_export_file) = create_signal(None::<web_sys::File>);
    let (bank_file, set_bank_file) = create_signal(None::<web_sys::File>);
    let (export_error, set_export_error) = create_signal(None::<String>);
    let (bank_error, set_bank_error) = create_signal(None::<String>);

    let on_export_change = move |ev: Event| pick_file(&ev, set_export_file, set_export_error);
    let on_bank_change = move |ev: Event| pick_file(&ev, set_bank_file, set_bank_error);

    let submit_disabled = move || export_file.get().is_none() || bank_file.get().is_none();

    // Only the workout export travels. The exercise bank slot is
    // validated but not part of the request; the backend reads its own
    // copy of the bank data.
    let on_submit = move |_| {
        let Some(file) = export_file.get_untracked() else { return };
        if bank_file.get_untracked().is_none() {
            return;
        }

        set_phase.set(UiPhase::Loading);

        spawn_local(async move {
            log::info!("uploading workout export \"{}\"", file.name());

            match request_charts(file, BACKEND_URL).await {
                Ok(images) => {
                    log::info!("received {} plot(s)", images.len());
                    set_phase.set(UiPhase::Success(images));
                }
                Err(e) => {
                    log::error!("upload failed: {}", e);
                    set_phase.set(UiPhase::Error(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="upload-section" id="uploadForm">
            <FileSlot
                kind=SlotKind::WorkoutExport
                input_id="exportInput"
                on_change=on_export_change
                selected=export_file
                error=export_error
            />
            <FileSlot
                kind=SlotKind::ExerciseBank
                input_id="bankInput"
                on_change=on_bank_change
                selected=bank_file
                error=bank_error
            />

            <button
                class="btn btn-primary"
                id="submitBtn"
                on:click=on_submit
                disabled=submit_disabled
            >
                "Get gainz"
            </button>
        </div>
    }
}

/// One labeled file input with its field-level error line.
#[component]
fn FileSlot(
    kind: SlotKind,
    input_id: &'static str,
    on_change: impl Fn(Event) + 'static,
    selected: ReadSignal<Option<web_sys::File>>,
    error: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="file-slot">
            <label for=input_id class="file-slot-label">{kind.label()}</label>
            <input
                type="file"
                id=input_id
                accept=".csv"
                on:change=on_change
            />

            <Show
                when=move || selected.get().is_some()
                fallback=|| view! { }
            >
                <span class="file-slot-name">
                    {move || selected.get().map(|f| f.name()).unwrap_or_default()}
                </span>
            </Show>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_mime_is_accepted() {
        assert!(validate_selection("text/csv", 1024).is_ok());
    }

    #[test]
    fn other_mime_types_are_rejected_regardless_of_size() {
        assert!(validate_selection("application/vnd.ms-excel", 1024).is_err());
        assert!(validate_selection("text/plain", 0).is_err());
        assert!(validate_selection("", 1024).is_err());
    }

    #[test]
    fn rejection_message_names_the_offending_type() {
        let msg = validate_selection("image/png", 10).unwrap_err();
        assert!(msg.contains("image/png"));
    }

    #[test]
    fn oversized_files_are_rejected() {
        assert!(validate_selection("text/csv", MAX_FILE_SIZE).is_ok());
        assert!(validate_selection("text/csv", MAX_FILE_SIZE + 1).is_err());
    }
}
