/// Phím điều hướng mà gallery phản hồi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Previous,
    Next,
}

impl GalleryKey {
    /// Ánh xạ từ `KeyboardEvent.key`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(GalleryKey::Previous),
            "ArrowRight" => Some(GalleryKey::Next),
            _ => None,
        }
    }
}

/// Trạng thái lightbox: đóng/mở và ảnh hiện tại, chỉ số quay vòng hai chiều.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryState {
    count: usize,
    index: usize,
    open: bool,
}

impl GalleryState {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            index: 0,
            open: false,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Không có ảnh thì không render gì.
    pub fn is_renderable(&self) -> bool {
        self.count > 0
    }

    /// Chỉ hiện nút trước/sau khi có từ hai ảnh.
    pub fn shows_controls(&self) -> bool {
        self.count > 1
    }

    pub fn open_at(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.index = index % self.count;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        if self.count == 0 {
            return;
        }
        self.index = (self.index + 1) % self.count;
    }

    pub fn prev(&mut self) {
        if self.count == 0 {
            return;
        }
        self.index = (self.index + self.count - 1) % self.count;
    }

    /// Xử lý phím; bỏ qua khi dialog đang đóng. Trả về `true` nếu chỉ số thay đổi.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }
        let before = self.index;
        match GalleryKey::from_key(key) {
            Some(GalleryKey::Previous) => self.prev(),
            Some(GalleryKey::Next) => self.next(),
            None => return false,
        }
        before != self.index
    }
}
