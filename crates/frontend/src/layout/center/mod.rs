//! Центральная область: страница выбирается по `AppGlobalContext.active`

use crate::dashboards::{AnalysisDashboard, OverviewDashboard};
use crate::domain::a001_log_record::ui::list::LogList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::settings::ui::SettingsPage;
use contracts::shared::display_settings::DefaultView;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-center" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Единственное место, где страница сопоставляется с компонентом
pub fn render_page(page: DefaultView) -> AnyView {
    match page {
        DefaultView::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        DefaultView::Logs => view! { <LogList /> }.into_any(),
        DefaultView::Analysis => view! { <AnalysisDashboard /> }.into_any(),
        DefaultView::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

#[component]
pub fn ActivePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let page = Memo::new(move |_| ctx.active.get());

    move || render_page(page.get())
}
