//! Looping illustration shown beside the registration form.
//!
//! DESIGN
//! ======
//! Plain inline SVG animated with CSS keyframes (see `style/cadastro.css`), so
//! it renders identically on the server and needs no player runtime.

use leptos::prelude::*;

#[component]
pub fn RegisterIllustration() -> impl IntoView {
    view! {
        <div class="register-illustration" aria-hidden="true">
            <svg
                class="register-illustration__svg"
                width="400"
                height="400"
                viewBox="0 0 400 400"
                preserveAspectRatio="xMidYMid slice"
            >
                <circle class="register-illustration__halo" cx="200" cy="200" r="150"></circle>
                <rect class="register-illustration__card" x="110" y="90" width="180" height="230" rx="16"></rect>
                <circle class="register-illustration__avatar" cx="200" cy="150" r="32"></circle>
                <rect class="register-illustration__line" x="140" y="205" width="120" height="12" rx="6"></rect>
                <rect class="register-illustration__line register-illustration__line--delay" x="140" y="230" width="120" height="12" rx="6"></rect>
                <rect class="register-illustration__line register-illustration__line--delay-2" x="140" y="255" width="120" height="12" rx="6"></rect>
                <path class="register-illustration__check" d="M170 285 L192 305 L232 268"></path>
            </svg>
        </div>
    }
}
