//! Toast notifications rendered from `NoticeState`.
//!
//! Each toast dismisses itself after `NOTICE_TTL` in the browser, or on click.

use leptos::prelude::*;

use crate::state::notices::{Notice, NoticeKind, NoticeState};

/// Fixed-position stack of the currently queued notices.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notices.get().notices
                key=|notice| notice.id
                children=move |notice: Notice| view! { <Toast notice=notice/> }
            />
        </div>
    }
}

#[component]
fn Toast(notice: Notice) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let id = notice.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::state::notices::NOTICE_TTL).await;
        // The stack may already be gone if the app was torn down.
        let _ = notices.try_update(|n| n.dismiss(id));
    });

    let error = notice.kind == NoticeKind::Error;

    view! {
        <div
            class="toast"
            class:toast--success=!error
            class:toast--error=error
            on:click=move |_| notices.update(|n| n.dismiss(id))
        >
            {notice.message}
        </div>
    }
}
