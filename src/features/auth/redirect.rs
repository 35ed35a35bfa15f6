use crate::features::auth::flow::Redirector;
use gloo_timers::callback::Timeout;
use leptos_router::NavigateOptions;

/// Navigates through the router once a delay has elapsed. The timer is
/// detached, so leaving the page early does not cancel it.
#[derive(Clone)]
pub struct RouterRedirect<F> {
    navigate: F,
}

impl<F> RouterRedirect<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Redirector for RouterRedirect<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn redirect_after(&self, path: &'static str, delay_ms: u32) {
        let navigate = self.navigate.clone();
        tracing::debug!(path, delay_ms, "redirect scheduled");
        Timeout::new(delay_ms, move || {
            navigate(path, NavigateOptions::default());
        })
        .forget();
    }
}
