//! Toast for auth notices.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4_000;

/// Shows the current `UiState::notice`; dismissed by click or after a delay.
#[component]
pub fn NoticeToast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    let notice_seq = Memo::new(move |_| ui.with(|u| u.notice_seq));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let seq = notice_seq.get();
        if seq == 0 {
            return;
        }
        gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
            // A newer notice owns the toast now.
            if ui.with_untracked(|u| u.notice_seq) == seq {
                ui.update(UiState::dismiss_notice);
            }
        })
        .forget();
    });

    let on_dismiss = move |_| ui.update(UiState::dismiss_notice);

    view! {
        {move || {
            ui.get()
                .notice
                .map(|notice| {
                    let class = format!("notice notice--{}", notice.tone().class_suffix());
                    view! {
                        <div class=class role="status" on:click=on_dismiss>
                            {notice.message()}
                        </div>
                    }
                })
        }}
    }
}
