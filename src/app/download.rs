use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::toaster::Notifier;
use crate::notification::Notification;
use crate::resume::{resume_file_name, resume_text};

#[derive(Error, Debug, Clone)]
pub enum DownloadError {
    #[error("couldn't create file: {0}")]
    Blob(String),
    #[error("couldn't create download link: {0}")]
    Link(String),
    #[error("page has no body")]
    NoBody,
}

fn describe(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

/// Hands `contents` to the browser's save mechanism as a plain-text file.
pub fn offer_text_file(file_name: &str, contents: &str) -> Result<(), DownloadError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let opts = BlobPropertyBag::new();
    opts.set_type("text/plain");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|e| DownloadError::Blob(describe(e)))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| DownloadError::Blob(describe(e)))?;

    let res = click_link(&url, file_name);
    let _ = Url::revoke_object_url(&url);
    res
}

fn click_link(url: &str, file_name: &str) -> Result<(), DownloadError> {
    let document = document();
    let body = document.body().ok_or(DownloadError::NoBody)?;
    let link = document
        .create_element("a")
        .map_err(|e| DownloadError::Link(describe(e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| DownloadError::Link("created element is not an anchor".to_string()))?;
    link.set_href(url);
    link.set_download(file_name);

    body.append_child(&link)
        .map_err(|e| DownloadError::Link(describe(e)))?;
    link.click();
    body.remove_child(&link)
        .map_err(|e| DownloadError::Link(describe(e)))?;
    Ok(())
}

pub fn download_resume(notifier: Notifier) {
    match offer_text_file(&resume_file_name(), &resume_text()) {
        Ok(()) => {
            log::info!("resume downloaded");
            notifier.notify(Notification::success("Resume downloaded successfully!"));
        }
        Err(e) => {
            log::error!("resume download failed: {e}");
            notifier.notify(Notification::error("Couldn't download resume").with_description(e.to_string()));
        }
    }
}

#[component]
pub fn DownloadResumeButton(#[prop(into)] classes: String) -> impl IntoView {
    let notifier = super::toaster::use_notifier();
    view! {
        <button type="button" class=classes on:click=move |_| download_resume(notifier)>
            "Download Resume"
        </button>
    }
}
