//! Google Identity Services button.
//!
//! The GIS script (`accounts.google.com/gsi/client`) is loaded by the page
//! shell. This module looks up `google.accounts.id` at runtime, so a missing
//! or blocked script only hides federated sign-in.

/// Script URL for Google Identity Services.
pub const GSI_SCRIPT_URL: &str = "https://accounts.google.com/gsi/client";

/// Render the GIS button into `container`. `on_credential` receives the id
/// token to exchange at `/auth/google-login`.
///
/// # Errors
///
/// Returns a description when the GIS script is not loaded or rejects the call.
#[cfg(feature = "hydrate")]
pub fn render_button(
    client_id: &str,
    container: &web_sys::HtmlElement,
    on_credential: impl Fn(String) + 'static,
) -> Result<(), String> {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    fn get(target: &JsValue, key: &str) -> Result<JsValue, String> {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .ok_or_else(|| format!("google identity services: `{key}` unavailable"))
    }

    fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), String> {
        Reflect::set(target, &JsValue::from_str(key), value)
            .map(drop)
            .map_err(|e| format!("google identity services: {e:?}"))
    }

    fn method(target: &JsValue, key: &str) -> Result<Function, String> {
        get(target, key)?.dyn_into::<Function>().map_err(|_| format!("google identity services: `{key}` is not callable"))
    }

    let window = web_sys::window().ok_or("no window")?;
    let id = get(&get(&get(&window.into(), "google")?, "accounts")?, "id")?;

    let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
        match Reflect::get(&response, &JsValue::from_str("credential")).ok().and_then(|v| v.as_string()) {
            Some(token) => on_credential(token),
            None => leptos::logging::warn!("google sign-in returned no credential"),
        }
    });

    let init = Object::new();
    set(&init, "client_id", &JsValue::from_str(client_id))?;
    set(&init, "callback", &callback.into_js_value())?;
    method(&id, "initialize")?.call1(&id, &init).map_err(|e| format!("google initialize failed: {e:?}"))?;

    let options = Object::new();
    set(&options, "theme", &JsValue::from_str("outline"))?;
    set(&options, "size", &JsValue::from_str("large"))?;
    set(&options, "text", &JsValue::from_str("continue_with"))?;
    method(&id, "renderButton")?
        .call2(&id, container, &options)
        .map_err(|e| format!("google renderButton failed: {e:?}"))?;
    Ok(())
}
