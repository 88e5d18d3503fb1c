use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::preview::FileSelection;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::super::{FlashKind, Model};

/// Timestamp format stored with every record.
pub const FECHA_FORMATO: &str = "%Y-%m-%d %H:%M:%S";

pub fn fecha_actual() -> String {
    chrono::Local::now().format(FECHA_FORMATO).to_string()
}

/// Collects the input's file list in selection order. No filtering
/// happens here; whatever the picker produced is handed on.
pub fn selection_from_input(input: &HtmlInputElement) -> FileSelection<GlooFile> {
    let files = input
        .files()
        .map(|list| {
            (0..list.length())
                .filter_map(|i| list.item(i))
                .map(GlooFile::from)
                .collect()
        })
        .unwrap_or_default();
    FileSelection::new(files)
}

pub fn display_style(visible: bool) -> &'static str {
    if visible { "display: block;" } else { "display: none;" }
}

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

pub fn render_flash(model: &Model) -> Html {
    if let Some(flash) = &model.flash {
        let (class, icon) = match flash.kind {
            FlashKind::Ok => ("flash flash-ok", "fa-solid fa-circle-check"),
            FlashKind::Error => ("flash flash-error", "fa-solid fa-circle-exclamation"),
        };
        html! {
            <div class={class}>
                <i class={icon}></i>
                <p>{ &flash.text }</p>
            </div>
        }
    } else {
        html! {}
    }
}
