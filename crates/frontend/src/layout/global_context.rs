use contracts::shared::display_settings::DefaultView;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Параметры адресной строки, которыми владеет оболочка
#[derive(Debug, Default, Serialize, Deserialize)]
struct PageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<String>,
}

/// Состояние оболочки: активная страница и видимость боковой панели
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<DefaultView>,
    pub left_open: RwSignal<bool>,
}

/// Страница из `?active=`, если значение распознано, иначе страница по умолчанию
pub fn resolve_initial_page(active_param: Option<&str>, fallback: DefaultView) -> DefaultView {
    active_param
        .and_then(|value| value.parse::<DefaultView>().ok())
        .unwrap_or(fallback)
}

/// Разбор строки `location.search` в значение параметра `active`
pub fn active_param(search: &str) -> Option<String> {
    let params: PageParams =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.active
}

/// `?active=<page>` для записи в адресную строку
pub fn active_search(page: DefaultView) -> String {
    let params = PageParams {
        active: Some(page.as_str().to_string()),
    };
    let query_string = serde_qs::to_string(&params).unwrap_or_default();
    format!("?{}", query_string)
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

impl AppGlobalContext {
    pub fn new(initial: DefaultView) -> Self {
        Self {
            active: RwSignal::new(initial),
            left_open: RwSignal::new(true),
        }
    }

    /// Начальная страница из URL, затем синхронизация активной страницы обратно в URL
    pub fn init_router_integration(&self, default_view: DefaultView) {
        let param = active_param(&current_search());
        let initial = resolve_initial_page(param.as_deref(), default_view);
        if let Some(value) = param.as_deref() {
            if value.parse::<DefaultView>().is_err() {
                log::warn!("unknown page '{}' in URL, falling back to {}", value, default_view);
            }
        }
        self.active.set(initial);

        let this = *self;
        Effect::new(move |_| {
            let new_url = active_search(this.active.get());

            // Only update URL if it actually changed
            if current_search() != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, page: DefaultView) {
        log::debug!("activate page: {}", page);
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_param_wins() {
        assert_eq!(
            resolve_initial_page(Some("logs"), DefaultView::Dashboard),
            DefaultView::Logs
        );
    }

    #[test]
    fn test_missing_or_unknown_param_falls_back() {
        assert_eq!(
            resolve_initial_page(None, DefaultView::Analysis),
            DefaultView::Analysis
        );
        assert_eq!(
            resolve_initial_page(Some("reports"), DefaultView::Settings),
            DefaultView::Settings
        );
    }

    #[test]
    fn test_active_param_parsing() {
        assert_eq!(active_param("?active=settings").as_deref(), Some("settings"));
        assert_eq!(active_param("?other=1").as_deref(), None);
        assert_eq!(active_param("").as_deref(), None);
    }

    #[test]
    fn test_active_search_roundtrip() {
        let search = active_search(DefaultView::Analysis);
        assert_eq!(search, "?active=analysis");
        assert_eq!(
            resolve_initial_page(active_param(&search).as_deref(), DefaultView::Dashboard),
            DefaultView::Analysis
        );
    }
}
