use serde::{Deserialize, Serialize};

use crate::JourneyError;

/// Hình học của đường cong trang trí (đơn vị px của SVG).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathGeometry {
    /// Hoành độ mà mọi band bắt đầu và kết thúc.
    pub center_x: i64,
    pub start_y: i64,
    pub left_x: i64,
    pub right_x: i64,
    /// Khoảng cách dọc từ mép band tới điểm điều khiển.
    pub control_inset: i64,
}

impl Default for PathGeometry {
    fn default() -> Self {
        Self {
            center_x: 80,
            start_y: -10,
            left_x: 30,
            right_x: 130,
            control_inset: 200,
        }
    }
}

/// Cấu hình layout, animation và CDN ảnh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JourneyConfig {
    /// Chiều cao ước lượng của mỗi thẻ sự kiện.
    pub card_height: u32,
    /// Khoảng cách cộng thêm cho mỗi giai đoạn.
    pub section_spacing: u32,
    /// Chiều cao mỗi band của đường cong.
    pub band_size: u32,
    pub path: PathGeometry,
    pub card_threshold: f64,
    pub marker_threshold: f64,
    /// Độ lệch ngang (px) khi thẻ còn ẩn.
    pub entrance_offset: f64,
    pub entrance_duration_ms: u32,
    /// Độ trễ tăng dần cho marker của từng giai đoạn.
    pub marker_stagger_ms: u32,
    pub path_draw_ms: u32,
    #[serde(default)]
    pub cdn_cloud: Option<String>,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            card_height: 280,
            section_spacing: 150,
            band_size: 600,
            path: PathGeometry::default(),
            card_threshold: 0.5,
            marker_threshold: 0.8,
            entrance_offset: 50.0,
            entrance_duration_ms: 500,
            marker_stagger_ms: 200,
            path_draw_ms: 3000,
            cdn_cloud: None,
        }
    }
}

impl JourneyConfig {
    pub fn validate(&self) -> Result<(), JourneyError> {
        if self.card_height == 0 {
            return Err(JourneyError::InvalidConfig(
                "card_height phải lớn hơn 0".to_string(),
            ));
        }
        if self.band_size == 0 {
            return Err(JourneyError::InvalidConfig(
                "band_size phải lớn hơn 0".to_string(),
            ));
        }
        for (name, value) in [
            ("card_threshold", self.card_threshold),
            ("marker_threshold", self.marker_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(JourneyError::InvalidConfig(format!(
                    "{name} phải nằm trong (0, 1], nhận {value}"
                )));
            }
        }
        if !self.entrance_offset.is_finite() {
            return Err(JourneyError::InvalidConfig(
                "entrance_offset phải là số hữu hạn".to_string(),
            ));
        }
        Ok(())
    }
}

/// Ghi đè một phần cấu hình (từ JS hoặc file JSON).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub card_height: Option<u32>,
    #[serde(default)]
    pub section_spacing: Option<u32>,
    #[serde(default)]
    pub band_size: Option<u32>,
    #[serde(default)]
    pub card_threshold: Option<f64>,
    #[serde(default)]
    pub marker_threshold: Option<f64>,
    #[serde(default)]
    pub entrance_offset: Option<f64>,
    #[serde(default)]
    pub entrance_duration_ms: Option<u32>,
    #[serde(default)]
    pub cdn_cloud: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(self, mut base: JourneyConfig) -> JourneyConfig {
        if let Some(value) = self.card_height {
            base.card_height = value;
        }
        if let Some(value) = self.section_spacing {
            base.section_spacing = value;
        }
        if let Some(value) = self.band_size {
            base.band_size = value;
        }
        if let Some(value) = self.card_threshold {
            base.card_threshold = value;
        }
        if let Some(value) = self.marker_threshold {
            base.marker_threshold = value;
        }
        if let Some(value) = self.entrance_offset {
            base.entrance_offset = value;
        }
        if let Some(value) = self.entrance_duration_ms {
            base.entrance_duration_ms = value;
        }
        if self.cdn_cloud.is_some() {
            base.cdn_cloud = self.cdn_cloud;
        }
        base
    }
}

impl From<ConfigOverrides> for JourneyConfig {
    fn from(overrides: ConfigOverrides) -> Self {
        overrides.apply(JourneyConfig::default())
    }
}
