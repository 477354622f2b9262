//! Food photo upload form posting to `/scan`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::upload_gate::{
    SCAN_STATUS_PARAM, check_submit, on_file_change, on_url_input, scan_enabled, scan_status_message,
};

/// File + URL inputs with a gated scan button.
///
/// The form submits natively (multipart POST) when the gate allows it; the
/// host redirects back with a `?scan=` status shown as the initial message.
#[component]
pub fn UploadForm() -> impl IntoView {
    let file_name = RwSignal::new(None::<String>);
    let url = RwSignal::new(String::new());
    let query = use_query_map();
    let status = query.with_untracked(|q| q.get(SCAN_STATUS_PARAM));
    let message = RwSignal::new(scan_status_message(status.as_deref()));
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let scan_ref = NodeRef::<leptos::html::Button>::new();

    let on_file = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let name = file_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            file_name.set(name);
        }
        message.set(on_file_change(file_name.get_untracked().as_deref()));
    };

    let on_url = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let has_file = file_name.with_untracked(Option::is_some);
        message.update(|m| {
            let next = on_url_input(&value, has_file, m);
            *m = next;
        });
        url.set(value);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let has_file = file_name.with_untracked(Option::is_some);
        if let Err(err) = url.with_untracked(|u| check_submit(has_file, u)) {
            ev.prevent_default();
            message.set(err.into());
            #[cfg(feature = "hydrate")]
            {
                if let Some(button) = scan_ref.get_untracked() {
                    let _ = button.focus();
                }
            }
        }
    };

    let message_class = move || format!("upload-message upload-message--{}", message.with(|m| m.tone.class_suffix()));

    view! {
        <form
            id="uploadForm"
            class="upload-form"
            action="/scan"
            method="post"
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <label class="upload-form__file">
                "Upload a food photo"
                <input id="fileInput" type="file" name="file" accept="image/*" node_ref=file_ref on:change=on_file />
            </label>
            <span class="upload-form__or">"or"</span>
            <input
                class="upload-form__url"
                type="url"
                name="image_url"
                placeholder="Paste an image URL"
                prop:value=move || url.get()
                on:input=on_url
            />
            <button
                class="scan-btn"
                type="submit"
                node_ref=scan_ref
                disabled=move || !scan_enabled(file_name.with(Option::is_some), &url.get())
            >
                "Scan"
            </button>
            <p id="uploadMessage" class=message_class>{move || message.with(|m| m.text.clone())}</p>
        </form>
    }
}
