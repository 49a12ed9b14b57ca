//! Bridge WASM <-> JavaScript trung lập framework.

use journey_content::{authored_journey, parse_journey_value};
use journey_core::{
    compute_layout, decorative_path, ConfigOverrides, Journey, JourneyConfig, JourneyError,
    Location,
};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Layout của một giai đoạn như JS nhìn thấy.
#[derive(Debug, Serialize, PartialEq)]
pub struct PeriodReport {
    pub year: i32,
    pub location: Option<Location>,
    pub top: u32,
    pub height: u32,
}

/// Kết quả trả về cho JS: layout, tổng chiều cao và path trang trí.
#[derive(Debug, Serialize, PartialEq)]
pub struct LayoutReport {
    pub total_height: u32,
    pub path: String,
    pub periods: Vec<PeriodReport>,
}

/// Phần thuần Rust của `compute_layout`, dùng được ngoài môi trường wasm.
pub fn layout_report(journey: &Journey, config: &JourneyConfig) -> LayoutReport {
    let layout = compute_layout(journey, config);
    let periods = layout
        .periods
        .iter()
        .zip(&journey.periods)
        .map(|(slot, period)| PeriodReport {
            year: period.year,
            location: journey.period_location(slot.index),
            top: slot.top,
            height: slot.height,
        })
        .collect();

    LayoutReport {
        total_height: layout.total_height,
        path: decorative_path(layout.total_height, config.band_size, &config.path),
        periods,
    }
}

#[wasm_bindgen(js_name = compute_layout)]
pub fn compute_layout_js(journey: JsValue, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let journey_value = from_value::<serde_json::Value>(journey)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON journey: {err}")))?;
    let journey = parse_journey_value(&journey_value)
        .map_err(|err| JsValue::from_str(&format_journey_error(err)))?;

    let cfg = match config {
        Some(js_cfg) => {
            let overrides: ConfigOverrides = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            JourneyConfig::from(overrides)
        }
        None => JourneyConfig::default(),
    };
    cfg.validate()
        .map_err(|err| JsValue::from_str(&format_journey_error(err)))?;

    to_value(&layout_report(&journey, &cfg))
        .map_err(|err| JsValue::from_str(&format!("Không serialize layout: {err}")))
}

/// Journey soạn sẵn của trang, dạng object JS.
#[wasm_bindgen(js_name = authored_journey)]
pub fn authored_journey_js() -> Result<JsValue, JsValue> {
    to_value(&authored_journey())
        .map_err(|err| JsValue::from_str(&format!("Không serialize journey: {err}")))
}

fn format_journey_error(err: JourneyError) -> String {
    format!("Journey error: {err}")
}
