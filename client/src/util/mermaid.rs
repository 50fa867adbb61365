//! Binding to the `mermaid` global loaded by the page shell.
//!
//! ARCHITECTURE
//! ============
//! `diagram::render::RenderPipeline` only sees the [`RenderEngine`] trait.
//! [`MermaidEngine`] implements it over `mermaid.render`, converting thrown
//! JS errors into [`EngineError`] so nothing escapes as an exception. On the
//! server the engine is absent and every render reports an error; renders
//! are only issued from client-side effects.

use async_trait::async_trait;

use diagram::config::EngineConfig;
use diagram::render::{EngineError, RenderEngine};

#[cfg(feature = "hydrate")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = mermaid, js_name = initialize)]
        pub fn initialize(config: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(catch, js_namespace = mermaid, js_name = render)]
        pub async fn render(id: &str, text: &str) -> Result<JsValue, JsValue>;
    }
}

/// Hand `config` to `mermaid.initialize`. Failures are logged; rendering
/// then proceeds with the engine's defaults.
pub fn initialize(config: &EngineConfig) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::js::error_message;

        let applied = serde_json::to_string(config)
            .map_err(|err| err.to_string())
            .and_then(|json| js_sys::JSON::parse(&json).map_err(|err| error_message(&err)))
            .and_then(|value| ffi::initialize(&value).map_err(|err| error_message(&err)));
        match applied {
            Ok(()) => log::debug!("mermaid initialized (theme {})", config.theme),
            Err(message) => log::error!("mermaid initialize failed: {message}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// The browser `mermaid` library.
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidEngine;

#[async_trait(?Send)]
impl RenderEngine for MermaidEngine {
    async fn render(&self, id: &str, source: &str) -> Result<String, EngineError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::js::error_message;

            let result = match ffi::render(id, source).await {
                Ok(result) => result,
                Err(err) => {
                    remove_error_artifact(id);
                    return Err(EngineError::new(error_message(&err)));
                }
            };
            let svg = js_sys::Reflect::get(&result, &wasm_bindgen::JsValue::from_str("svg"))
                .map_err(|err| EngineError::new(error_message(&err)))?;
            svg.as_string().ok_or_else(|| EngineError::new("rendering engine returned no markup"))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, source);
            Err(EngineError::new("rendering engine is not available during server rendering"))
        }
    }
}

/// A failed render leaves its scratch container (`#d<id>`) in the body.
#[cfg(feature = "hydrate")]
fn remove_error_artifact(id: &str) {
    let artifact = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(&format!("d{id}")));
    if let Some(element) = artifact {
        element.remove();
    }
}
