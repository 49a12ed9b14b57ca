use crate::JourneyConfig;

/// Trạng thái hiển thị một chiều của một thẻ hoặc marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Pending,
    Visible,
}

/// Chốt một lần: `Pending -> Visible` khi tỉ lệ hiển thị lần đầu vượt ngưỡng.
///
/// Không bao giờ quay lại `Pending`, nên cuộn ra rồi cuộn vào không phát lại animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    state: Visibility,
    threshold: f64,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: Visibility::Pending,
            threshold,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Ghi nhận tỉ lệ diện tích đang hiển thị. Trả về `true` đúng một lần, lúc chốt đóng.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state == Visibility::Visible || ratio.is_nan() {
            return false;
        }
        if ratio >= self.threshold {
            self.state = Visibility::Visible;
            return true;
        }
        false
    }
}

/// Phía đặt thẻ so với trục giữa timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAlignment {
    Left,
    Right,
}

impl CardAlignment {
    /// Chỉ số toàn cục chẵn đặt bên phải, lẻ đặt bên trái.
    pub fn for_global_index(index: usize) -> Self {
        if index % 2 == 0 {
            CardAlignment::Right
        } else {
            CardAlignment::Left
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardAlignment::Left => "left",
            CardAlignment::Right => "right",
        }
    }

    /// Độ lệch ngang ban đầu: thẻ bên phải trượt vào từ phải, thẻ bên trái từ trái.
    pub fn hidden_offset(self, magnitude: f64) -> f64 {
        match self {
            CardAlignment::Left => -magnitude,
            CardAlignment::Right => magnitude,
        }
    }
}

/// Style inline cho animation xuất hiện.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceStyle {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl EntranceStyle {
    pub fn for_card(
        visibility: Visibility,
        alignment: CardAlignment,
        config: &JourneyConfig,
    ) -> Self {
        let (opacity, translate_x) = match visibility {
            Visibility::Pending => (0.0, alignment.hidden_offset(config.entrance_offset)),
            Visibility::Visible => (1.0, 0.0),
        };
        Self {
            opacity,
            translate_x,
            translate_y: 0.0,
            duration_ms: config.entrance_duration_ms,
            delay_ms: 0,
        }
    }

    /// Marker năm trượt từ -60 xuống -40, trễ dần theo chỉ số giai đoạn.
    pub fn for_marker(visibility: Visibility, period_index: usize, config: &JourneyConfig) -> Self {
        let (opacity, translate_y) = match visibility {
            Visibility::Pending => (0.0, -60.0),
            Visibility::Visible => (1.0, -40.0),
        };
        let step = u32::try_from(period_index).unwrap_or(u32::MAX);
        Self {
            opacity,
            translate_x: 0.0,
            translate_y,
            duration_ms: config.entrance_duration_ms,
            delay_ms: step.saturating_mul(config.marker_stagger_ms),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px); transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            self.opacity,
            self.translate_x,
            self.translate_y,
            d = self.duration_ms,
            delay = self.delay_ms,
        )
    }
}
