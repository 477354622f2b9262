//! Landing page: nav, scan form, auth dialogs.

use leptos::prelude::*;

use crate::components::auth_modal::{LoginModal, SignupModal};
use crate::components::nav_bar::NavBar;
use crate::components::notice_toast::NoticeToast;
use crate::components::upload_form::UploadForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="home-page">
            <section class="hero">
                <h1>"Calorie Scan"</h1>
                <p>"Snap a meal, get calories, protein and fat in seconds."</p>
            </section>
            <section id="scan" class="scan-section">
                <UploadForm/>
            </section>
        </main>
        <LoginModal/>
        <SignupModal/>
        <NoticeToast/>
    }
}
