//! Dialog overlay. While open it holds a `ModalLease`, so the page cannot
//! scroll and `Escape` closes the dialog; the lease is released when `open`
//! turns false or the component unmounts, whichever comes first.

use crate::app_lib::theme::{ModalSize, Theme};
use crate::components::overlay::{BrowserDocument, ModalLease};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional)] size: ModalSize,
    children: ChildrenFn,
) -> impl IntoView {
    let lease = StoredValue::new_local(None::<ModalLease<BrowserDocument>>);

    Effect::new(move |_| {
        let is_open = open.get();
        lease.update_value(|current| {
            if is_open && current.is_none() {
                let on_escape: Rc<dyn Fn()> = Rc::new(move || on_close.run(()));
                *current = Some(ModalLease::acquire(BrowserDocument, on_escape));
            } else if !is_open {
                current.take();
            }
        });
    });

    on_cleanup(move || {
        lease.try_update_value(|current| current.take());
    });

    let panel_class = format!("{} w-full {}", Theme::SURFACE, size.classes());

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50 p-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    class=panel_class.clone()
                    role="dialog"
                    aria-modal="true"
                    aria-label=title.clone()
                    on:click=|event| event.stop_propagation()
                >
                    <div class="flex items-center justify-between border-b border-gray-200 px-5 py-4 dark:border-gray-700">
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                            {title.clone()}
                        </h2>
                        <button
                            type="button"
                            class="rounded-lg p-1 text-gray-400 hover:bg-gray-100 hover:text-gray-900 dark:hover:bg-gray-700 dark:hover:text-white"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            <span class="material-symbols-outlined">"close"</span>
                        </button>
                    </div>
                    <div class="p-5">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
