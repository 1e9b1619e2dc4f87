//! Gear button with a small popover holding account actions.

use leptos::prelude::*;

/// Settings popover. Closes on Escape or once an action runs.
#[component]
pub fn SettingsMenu(on_sign_out: Callback<()>) -> impl IntoView {
    let open = RwSignal::new(false);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            open.set(false);
        }
    };

    view! {
        <div class="settings-menu" on:keydown=on_keydown>
            <button
                class="btn btn--icon settings-menu__trigger"
                title="Settings"
                aria-label="Settings"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "⚙"
            </button>
            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <div class="settings-menu__panel" role="menu">
                                <button
                                    class="btn btn--ghost settings-menu__item"
                                    role="menuitem"
                                    on:click=move |_| {
                                        open.set(false);
                                        on_sign_out.run(());
                                    }
                                >
                                    "Log out"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
