mod dashboard;
mod forgot_password;
mod login;
mod not_found;
mod reset_password;
mod verify_email;

pub(crate) use dashboard::DashboardPage;
pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use verify_email::VerifyEmailPage;

pub(crate) use crate::app_lib::paths;

use leptos::prelude::*;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Routes};

fn segment(path: &'static str) -> StaticSegment<&'static str> {
    StaticSegment(paths::route_segment(path))
}

/// Unknown paths fall through to the 404 page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=segment(paths::HOME) view=DashboardPage />
            <Route path=segment(paths::LOGIN) view=LoginPage />
            <Route path=segment(paths::FORGOT_PASSWORD) view=ForgotPasswordPage />
            <Route path=segment(paths::RESET_PASSWORD) view=ResetPasswordPage />
            <Route path=segment(paths::VERIFY_EMAIL) view=VerifyEmailPage />
        </Routes>
    }
}
