//! Browser-backed implementations of the core traits, plus the typed calls
//! the views use.

use guard_core::api;
use guard_core::api_base::{resolve_api_base, Location};
use guard_core::config::ApiConfig;
use guard_core::dashboard::{AnalyticsCounts, IncidentStatusCounts};
use guard_core::fetch::{FetchClient, FetchError, HttpRequest, HttpResponse, Transport};
use guard_core::modules::Portal;
use guard_core::session::{KeyValueStore, SessionStore, StoreError};
use guard_core::shell::Navigator;
use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Storage};

fn js_message(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

pub struct BrowserLocation(web_sys::Location);

impl Location for BrowserLocation {
    fn protocol(&self) -> String {
        self.0.protocol().unwrap_or_default()
    }

    fn hostname(&self) -> String {
        self.0.hostname().unwrap_or_default()
    }

    fn pathname(&self) -> String {
        self.0.pathname().unwrap_or_default()
    }
}

pub fn current_location() -> Option<BrowserLocation> {
    web_sys::window().map(|w| BrowserLocation(w.location()))
}

pub fn current_path() -> String {
    current_location()
        .map(|l| l.pathname())
        .unwrap_or_else(|| "/".to_string())
}

/// Pages outside either portal render the agency catalog.
pub fn current_portal() -> Portal {
    Portal::from_path(&current_path()).unwrap_or(Portal::Agency)
}

pub fn scroll_y() -> Option<f64> {
    web_sys::window().and_then(|w| w.scroll_y().ok())
}

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("window not available".into()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_message(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(js_message(&e)))
    }
}

pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, route: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("cannot navigate to {route}: window not available");
            return;
        };
        if let Err(e) = window.location().set_href(route) {
            log::error!("cannot navigate to {route}: {}", js_message(&e));
        }
    }
}

pub struct BrowserTransport;

fn network_err(e: JsValue) -> FetchError {
    FetchError::Network(js_message(&e))
}

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let window =
            web_sys::window().ok_or_else(|| FetchError::Network("window not available".into()))?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&request.url, &init).map_err(network_err)?;
        for (name, value) in &request.headers {
            req.headers().set(name, value).map_err(network_err)?;
        }

        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(network_err)?;
        let resp: Response = resp_value.dyn_into().map_err(network_err)?;
        let status = resp.status();
        let text: Promise = resp.text().map_err(network_err)?;
        let body = JsFuture::from(text)
            .await
            .map_err(network_err)?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse::new(status, body))
    }
}

pub fn session_store() -> SessionStore<LocalStorage> {
    SessionStore::new(LocalStorage)
}

pub fn api_client() -> FetchClient<BrowserTransport> {
    let config = ApiConfig::from_build_env();
    let location = current_location();
    let base = resolve_api_base(location.as_ref().map(|l| l as &dyn Location), &config);
    FetchClient::new(base, BrowserTransport)
}

pub async fn fetch_analytics_counts() -> Result<AnalyticsCounts, String> {
    let token = session_store().token();
    api::fetch_analytics_counts(&api_client(), token.as_deref())
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_incident_status_counts() -> Result<IncidentStatusCounts, String> {
    let token = session_store().token();
    api::fetch_incident_status_counts(&api_client(), token.as_deref())
        .await
        .map_err(|e| e.to_string())
}
