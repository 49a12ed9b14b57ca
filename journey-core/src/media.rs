/// Dựng URL ảnh responsive từ asset id trên CDN ảnh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCdn {
    cloud: Option<String>,
}

impl ImageCdn {
    pub fn new(cloud: Option<String>) -> Self {
        let cloud = cloud.filter(|name| !name.trim().is_empty());
        Self { cloud }
    }

    /// URL tuyệt đối được giữ nguyên; khi chưa cấu hình cloud thì trả lại asset id.
    pub fn url(&self, asset: &str, width: u32, height: u32) -> String {
        if asset.starts_with("http://") || asset.starts_with("https://") || asset.starts_with('/') {
            return asset.to_string();
        }
        match &self.cloud {
            Some(cloud) => format!(
                "https://res.cloudinary.com/{cloud}/image/upload/c_fill,w_{width},h_{height},f_auto,q_auto/{}",
                asset.trim_start_matches('/')
            ),
            None => asset.to_string(),
        }
    }
}
