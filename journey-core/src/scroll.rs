/// Sai số làm tròn khi so sánh với đáy document.
pub const BOTTOM_TOLERANCE: f64 = 0.5;
/// Độ dịch tối đa của hiệu ứng parallax (phần trăm chiều cao section).
pub const PARALLAX_MAX_PERCENT: f64 = 50.0;

/// Một lần đọc vị trí cuộn, dùng chung cho mọi phép tính trong cùng callback.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollSnapshot {
    pub fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    /// Điểm dò: giữa viewport.
    pub fn probe(&self) -> f64 {
        self.scroll_y + self.viewport_height / 2.0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_y + self.viewport_height >= self.document_height - BOTTOM_TOLERANCE
    }
}

/// Quét các anchor từ cuối lên đầu; anchor đầu tiên có `top <= probe` thắng.
pub fn active_section(anchors: &[f64], probe: f64) -> Option<usize> {
    anchors.iter().rposition(|top| *top <= probe)
}

/// Tiến độ 0 khi section chạm đáy viewport, 1 khi rời khỏi đỉnh viewport.
pub fn parallax_progress(section_top: f64, section_height: f64, snapshot: &ScrollSnapshot) -> f64 {
    let span = section_height + snapshot.viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    let travelled = snapshot.scroll_y + snapshot.viewport_height - section_top;
    (travelled / span).clamp(0.0, 1.0)
}

pub fn parallax_offset_percent(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * PARALLAX_MAX_PERCENT
}

/// Trạng thái cuộn toàn cục, hoàn toàn suy ra từ vị trí cuộn hiện tại.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub active_period: usize,
    pub at_bottom: bool,
    pub nav_expanded: bool,
}

/// Theo dõi section đang active và cờ chạm đáy.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    anchors: Vec<f64>,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn anchors(&self) -> &[f64] {
        &self.anchors
    }

    /// Thay tập anchor (đỉnh các section trong toạ độ document, theo thứ tự document).
    pub fn set_anchors(&mut self, anchors: Vec<f64>) {
        self.anchors = anchors;
    }

    /// Tính lại từ snapshot mới nhất. Khi chưa có anchor, giữ section cũ.
    pub fn observe(&mut self, snapshot: &ScrollSnapshot) -> ScrollState {
        if !self.anchors.is_empty() {
            self.state.active_period = active_section(&self.anchors, snapshot.probe()).unwrap_or(0);
        }
        self.state.at_bottom = snapshot.is_at_bottom();
        self.state
    }

    pub fn set_nav_expanded(&mut self, expanded: bool) -> ScrollState {
        self.state.nav_expanded = expanded;
        self.state
    }
}
