use serde::{Deserialize, Serialize};

use crate::{Journey, JourneyConfig};

/// Vị trí tuyệt đối của một giai đoạn trong container timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodLayout {
    pub index: usize,
    pub top: u32,
    pub height: u32,
}

impl PeriodLayout {
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// Layout dọc của toàn bộ timeline. Luôn suy ra từ `Journey`, không lưu trữ.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JourneyLayout {
    pub periods: Vec<PeriodLayout>,
    pub total_height: u32,
}

impl JourneyLayout {
    pub fn offset(&self, index: usize) -> Option<u32> {
        self.periods.get(index).map(|period| period.top)
    }

    pub fn height(&self, index: usize) -> Option<u32> {
        self.periods.get(index).map(|period| period.height)
    }

    /// Đỉnh của từng giai đoạn trong toạ độ document, với `origin` là đỉnh container.
    pub fn anchors(&self, origin: f64) -> Vec<f64> {
        self.periods
            .iter()
            .map(|period| origin + f64::from(period.top))
            .collect()
    }
}

/// Chiều cao của một giai đoạn chỉ phụ thuộc vào số sự kiện.
///
/// Chiều cao thẻ là hằng số ước lượng; nội dung dài có thể tràn sang thẻ kế.
pub fn period_height(event_count: usize, config: &JourneyConfig) -> u32 {
    let count = u32::try_from(event_count).unwrap_or(u32::MAX);
    count
        .saturating_mul(config.card_height)
        .saturating_add(config.section_spacing)
}

pub fn compute_layout(journey: &Journey, config: &JourneyConfig) -> JourneyLayout {
    let mut periods = Vec::with_capacity(journey.periods.len());
    let mut offset = 0u32;

    for (index, period) in journey.periods.iter().enumerate() {
        let height = period_height(period.events.len(), config);
        periods.push(PeriodLayout {
            index,
            top: offset,
            height,
        });
        offset = offset.saturating_add(height);
    }

    log::debug!(
        "journey layout: periods={} total_height={offset}",
        periods.len()
    );

    JourneyLayout {
        periods,
        total_height: offset,
    }
}
