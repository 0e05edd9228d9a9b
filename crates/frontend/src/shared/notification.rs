//! Transient success/error banners shown on top of the current page.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a banner stays on screen
const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert--success",
            NoticeKind::Info => "alert alert--info",
            NoticeKind::Error => "alert alert--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

#[derive(Clone, Copy)]
pub struct NotificationContext {
    items: RwSignal<Vec<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl NotificationContext {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        match notice.kind {
            NoticeKind::Error => log::warn!("notice: {}", notice.text),
            _ => log::debug!("notice: {}", notice.text),
        }
        self.items.update(|items| items.push((id, notice)));

        let items = self.items;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
            let _ = items.try_update(|items| items.retain(|(i, _)| *i != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|(i, _)| *i != id));
    }
}

impl Default for NotificationContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationContext {
    use_context::<NotificationContext>()
        .expect("NotificationContext not found. Provide it in App.")
}

/// Renders the active banners
#[component]
pub fn NotificationHost() -> impl IntoView {
    let ctx = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || ctx.items.get()
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    view! {
                        <div class=notice.kind.class() on:click=move |_| ctx.dismiss(id)>
                            {notice.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
