use crate::shared::api_utils::{api_url, with_query};
use crate::shared::error::ApiError;
use contracts::domain::a001_log_record::{LogPage, LogQuery, LogRecord, LogRecordInput};
use gloo_net::http::{Request, Response};

const LOGS_PATH: &str = "/logs";

fn logs_url() -> String {
    api_url(LOGS_PATH)
}

fn log_url(id: &str) -> String {
    api_url(&format!("{}/{}", LOGS_PATH, urlencoding::encode(id)))
}

/// URL списка: передаются только непустые поля запроса
pub fn list_url(query: &LogQuery) -> String {
    with_query(&logs_url(), &query.to_query_pairs())
}

fn ensure_ok(response: &Response, id: Option<&str>) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::from_status(response.status(), id))
    }
}

/// Получить страницу логов по фильтру
pub async fn list_logs(query: &LogQuery) -> Result<LogPage, ApiError> {
    let url = list_url(query);
    log::debug!("GET {}", url);

    let response = Request::get(&url).send().await?;
    ensure_ok(&response, None)?;

    let page: LogPage = response.json().await?;
    log::debug!("received {} of {} logs", page.items.len(), page.total);
    Ok(page)
}

/// Получить запись по ID
pub async fn get_log(id: &str) -> Result<LogRecord, ApiError> {
    let response = Request::get(&log_url(id)).send().await?;
    ensure_ok(&response, Some(id))?;
    Ok(response.json().await?)
}

/// Создать запись
pub async fn create_log(input: &LogRecordInput) -> Result<LogRecord, ApiError> {
    let response = Request::post(&logs_url())
        .json(input)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    ensure_ok(&response, None)?;

    let created: LogRecord = response.json().await?;
    log::info!("created log {}", created.id);
    Ok(created)
}

/// Обновить запись
pub async fn update_log(id: &str, input: &LogRecordInput) -> Result<LogRecord, ApiError> {
    let response = Request::put(&log_url(id))
        .json(input)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    ensure_ok(&response, Some(id))?;

    let updated: LogRecord = response.json().await?;
    log::info!("updated log {}", updated.id);
    Ok(updated)
}

/// Удалить запись. Тело ответа не читаем (204 No Content).
pub async fn delete_log(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&log_url(id)).send().await?;
    ensure_ok(&response, Some(id))?;
    log::info!("deleted log {}", id);
    Ok(())
}
