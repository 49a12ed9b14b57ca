//! Logic lõi của timeline "My Journey": mô hình nội dung, tính layout,
//! sinh đường cong trang trí và các trạng thái cuộn/hiển thị.

use serde::{Deserialize, Serialize};

mod config;
mod gallery;
mod layout;
mod media;
mod path;
mod scroll;
mod visibility;

pub use config::{ConfigOverrides, JourneyConfig, PathGeometry};
pub use gallery::{GalleryKey, GalleryState};
pub use layout::{compute_layout, period_height, JourneyLayout, PeriodLayout};
pub use media::ImageCdn;
pub use path::{decorative_path, CurveDirection, CurvePath, CurveSegment};
pub use scroll::{
    active_section, parallax_offset_percent, parallax_progress, ScrollSnapshot, ScrollState,
    ScrollTracker, BOTTOM_TOLERANCE, PARALLAX_MAX_PERCENT,
};
pub use visibility::{CardAlignment, EntranceStyle, Visibility, VisibilityLatch};

/// Các địa điểm đã biết, mỗi nơi có bảng màu riêng.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Location {
    Belgium,
    Lisbon,
    #[serde(rename = "New York City")]
    NewYorkCity,
    #[serde(rename = "San Francisco")]
    SanFrancisco,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Belgium,
        Location::Lisbon,
        Location::NewYorkCity,
        Location::SanFrancisco,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Location::Belgium => "Belgium",
            Location::Lisbon => "Lisbon",
            Location::NewYorkCity => "New York City",
            Location::SanFrancisco => "San Francisco",
        }
    }

    /// Giá trị ổn định dùng cho thuộc tính `data-location`.
    pub fn slug(self) -> &'static str {
        match self {
            Location::Belgium => "belgium",
            Location::Lisbon => "lisbon",
            Location::NewYorkCity => "new-york-city",
            Location::SanFrancisco => "san-francisco",
        }
    }

    /// Ba điểm màu (from, via, to) của dải gradient.
    pub fn palette(self) -> [&'static str; 3] {
        match self {
            // cờ Bỉ
            Location::Belgium => ["#000000", "#eab308", "#ef4444"],
            Location::Lisbon => ["#3b82f6", "#2dd4bf", "#fdba74"],
            Location::NewYorkCity => ["#374151", "#64748b", "#2563eb"],
            Location::SanFrancisco => ["#a5f3fc", "#d1d5db", "#fb923c"],
        }
    }

    pub fn gradient_css(self) -> String {
        let [from, via, to] = self.palette();
        format!("linear-gradient(to right, {from}, {via}, {to})")
    }

    /// Màu nền nhạt của trang khi giai đoạn tại địa điểm này đang active.
    pub fn background_tint(self) -> &'static str {
        match self {
            Location::Belgium => "#fffbeb",
            Location::Lisbon => "#f0fdfa",
            Location::NewYorkCity => "#f1f5f9",
            Location::SanFrancisco => "#fff7ed",
        }
    }
}

/// Một ảnh trong gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// Nội dung gắn với một sự kiện. Phần lớn là embed của bên thứ ba.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventContent {
    #[default]
    Empty,
    Text {
        text: String,
    },
    Podcast {
        url: String,
    },
    Video {
        url: String,
        title: String,
    },
    Instagram {
        url: String,
    },
    Article {
        title: String,
        url: String,
        image: String,
    },
    Preview {
        title: String,
        url: String,
        image: String,
    },
    Gallery {
        images: Vec<GalleryImage>,
    },
}

impl EventContent {
    pub fn text(value: impl Into<String>) -> Self {
        EventContent::Text { text: value.into() }
    }

    /// `true` khi không có gì để hiển thị (renderer bỏ qua khung nội dung).
    pub fn is_empty(&self) -> bool {
        match self {
            EventContent::Empty => true,
            EventContent::Text { text } => text.trim().is_empty(),
            EventContent::Gallery { images } => images.is_empty(),
            _ => false,
        }
    }
}

/// Một sự kiện trên timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JourneyEvent {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub content: EventContent,
}

impl JourneyEvent {
    pub fn new(date: impl Into<String>, title: impl Into<String>, content: EventContent) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            location: None,
            content,
        }
    }

    /// Khóa render dựa trên cặp `(date, title)`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.date, self.title)
    }
}

/// Một giai đoạn (năm, có thể kèm địa điểm) gom nhiều sự kiện.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    #[serde(default)]
    pub location: Option<Location>,
    pub events: Vec<JourneyEvent>,
}

impl Period {
    pub fn key(&self, index: usize) -> String {
        let location = self.location.map(Location::label).unwrap_or("unknown");
        format!("{}-{location}-{index}", self.year)
    }
}

/// Vị trí của một sự kiện trong chuỗi đã làm phẳng.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventPosition<'a> {
    pub period_index: usize,
    pub event_index: usize,
    pub global_index: usize,
    pub event: &'a JourneyEvent,
}

impl EventPosition<'_> {
    /// Chính sách căn trái/phải duy nhất: theo chẵn lẻ của chỉ số toàn cục.
    pub fn alignment(&self) -> CardAlignment {
        CardAlignment::for_global_index(self.global_index)
    }
}

/// Toàn bộ nội dung timeline, theo thứ tự đã soạn (mới nhất trước).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Journey {
    pub periods: Vec<Period>,
}

impl Journey {
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.periods.iter().map(|period| period.events.len()).sum()
    }

    /// Duyệt mọi sự kiện theo thứ tự render.
    pub fn events(&self) -> impl Iterator<Item = EventPosition<'_>> + '_ {
        self.periods
            .iter()
            .enumerate()
            .flat_map(|(period_index, period)| {
                period
                    .events
                    .iter()
                    .enumerate()
                    .map(move |(event_index, event)| (period_index, event_index, event))
            })
            .enumerate()
            .map(
                |(global_index, (period_index, event_index, event))| EventPosition {
                    period_index,
                    event_index,
                    global_index,
                    event,
                },
            )
    }

    /// Các năm khác nhau theo thứ tự xuất hiện đầu tiên.
    pub fn distinct_years(&self) -> Vec<i32> {
        let mut years = Vec::new();
        for period in &self.periods {
            if !years.contains(&period.year) {
                years.push(period.year);
            }
        }
        years
    }

    pub fn first_period_of_year(&self, year: i32) -> Option<usize> {
        self.periods.iter().position(|period| period.year == year)
    }

    /// Chỉ số toàn cục của sự kiện đầu tiên khớp `(date, title)`.
    pub fn global_index_of(&self, date: &str, title: &str) -> Option<usize> {
        self.events()
            .find(|pos| pos.event.date == date && pos.event.title == title)
            .map(|pos| pos.global_index)
    }

    /// Địa điểm hiệu lực của giai đoạn, rơi về địa điểm của sự kiện đầu tiên.
    pub fn period_location(&self, index: usize) -> Option<Location> {
        let period = self.periods.get(index)?;
        period
            .location
            .or_else(|| period.events.iter().find_map(|event| event.location))
    }
}

/// Lỗi chung khi nạp nội dung hoặc cấu hình.
#[derive(Debug, thiserror::Error)]
pub enum JourneyError {
    #[error("Dữ liệu đầu vào thiếu thông tin tối thiểu")]
    MissingData,
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Cấu hình không hợp lệ: {0}")]
    InvalidConfig(String),
}
