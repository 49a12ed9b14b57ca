//! Thành phần giao diện "My Journey" cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod card;
#[cfg(target_arch = "wasm32")]
mod embeds;
#[cfg(target_arch = "wasm32")]
mod hooks;
#[cfg(target_arch = "wasm32")]
mod listeners;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
pub mod styles;
#[cfg(target_arch = "wasm32")]
mod timeline;

#[cfg(target_arch = "wasm32")]
pub use listeners::{EventListenerGuard, ObserverGuard};
#[cfg(target_arch = "wasm32")]
pub use page::{mount_journey, mount_journey_with, JourneyPage, JourneyPageProps};
#[cfg(target_arch = "wasm32")]
pub use timeline::{Timeline, TimelineProps};

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_journey(_: &str) -> Result<(), wasm_bindgen::JsValue> {
    Err(unsupported_target())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_journey_with(
    _: &str,
    _: wasm_bindgen::JsValue,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(unsupported_target())
}

#[cfg(not(target_arch = "wasm32"))]
fn unsupported_target() -> wasm_bindgen::JsValue {
    wasm_bindgen::JsValue::from_str("journey-ui chỉ hỗ trợ biên dịch target wasm32")
}
