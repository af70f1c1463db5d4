//! Knowledge-base document upload (admin).

use leptos::prelude::*;

use crate::net::api::BrowserApi;
use crate::state::upload::{DOCUMENT_ACCEPT_ATTR, UploadState, UploadStatus};
use crate::util::files::format_size;

#[component]
pub fn UploadPage() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let uploads = RwSignal::new(UploadState::default());

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            uploads.update(UploadState::clear_rejected);
            for file in crate::util::files::selected(&input) {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let size = file.size() as u64;
                let Some(id) = uploads.try_update(|u| u.enqueue(&file.name(), size)).flatten() else {
                    continue;
                };
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let outcome = match crate::util::files::read(&file).await {
                        Ok(upload) => api.upload_document(upload).await.map(drop).map_err(|e| e.to_string()),
                        Err(e) => Err(e),
                    };
                    if let Err(e) = &outcome {
                        leptos::logging::warn!("upload of {} failed: {e}", file.name());
                    }
                    uploads.update(|u| u.finish(&id, outcome));
                });
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &api, uploads);
        }
    };

    view! {
        <div class="upload-page">
            <h1>"Knowledge Base"</h1>
            <p class="upload-page__subtitle">
                "Upload documents the assistant should learn from. Accepted formats: PDF, DOCX, TXT, HTML."
            </p>

            <label class="upload-drop">
                <input type="file" multiple accept=DOCUMENT_ACCEPT_ATTR on:change=on_change/>
                <span>"Choose files to upload"</span>
            </label>

            {move || {
                let rejected = uploads.with(|u| u.rejected.clone());
                (!rejected.is_empty())
                    .then(|| view! { <p class="upload-page__rejected">{format!("Unsupported file type: {}", rejected.join(", "))}</p> })
            }}

            <ul class="upload-list">
                {move || {
                    uploads
                        .with(|u| u.entries.clone())
                        .into_iter()
                        .map(|entry| {
                            let id = entry.id.clone();
                            let (label, class) = match &entry.status {
                                UploadStatus::Uploading => ("Uploading...".to_owned(), "upload-item--uploading"),
                                UploadStatus::Success => ("Uploaded".to_owned(), "upload-item--success"),
                                UploadStatus::Error(message) => (message.clone(), "upload-item--error"),
                            };
                            view! {
                                <li class=format!("upload-item {class}")>
                                    <span class="upload-item__name">{entry.name}</span>
                                    <span class="upload-item__size">{format_size(entry.size)}</span>
                                    <span class="upload-item__status">{label}</span>
                                    <button class="btn btn--ghost" on:click=move |_| uploads.update(|u| u.remove(&id))>
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
