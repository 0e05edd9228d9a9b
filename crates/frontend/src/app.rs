use crate::layout::center::ActivePage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::notification::{NotificationContext, NotificationHost};
use crate::shared::theme::ThemeProvider;
use crate::system::settings::SettingsStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Settings first: the shell reads the default view from it
    let settings = SettingsStore::new();
    provide_context(settings);
    provide_context(NotificationContext::new());

    let default_view = settings.snapshot_untracked().default_view;
    let ctx = AppGlobalContext::new(default_view);
    provide_context(ctx);
    ctx.init_router_integration(default_view);

    view! {
        <ThemeProvider>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <ActivePage /> }.into_any()
            />
            <NotificationHost />
        </ThemeProvider>
    }
}
