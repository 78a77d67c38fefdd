use super::aggregate::{MediaFolder, MediaItem, MediaKind};

fn media(
    id: i64,
    file_name: &str,
    folder: MediaFolder,
    size_bytes: u64,
    alt_text: &str,
    uploaded_at: &str,
) -> MediaItem {
    MediaItem {
        id,
        file_name: file_name.to_string(),
        url: format!("/uploads/{file_name}"),
        kind: MediaKind::from_file_name(file_name),
        folder,
        size_bytes,
        alt_text: alt_text.to_string(),
        uploaded_at: uploaded_at.to_string(),
    }
}

pub fn sample_media() -> Vec<MediaItem> {
    use MediaFolder::*;
    vec![
        media(1, "banner-tet-2024.jpg", Banners, 245_760, "Banner khuyến mãi Tết", "2024-01-20"),
        media(2, "iphone-15-pro.png", Products, 512_000, "iPhone 15 Pro", "2024-02-02"),
        media(3, "gioi-thieu-cua-hang.mp4", Posts, 15_728_640, "Video giới thiệu", "2024-02-14"),
        media(4, "bang-gia-thang-3.pdf", Posts, 1_258_291, "", "2024-03-01"),
        media(5, "logo.svg", Products, 8_192, "Logo cửa hàng", "2024-03-05"),
        media(6, "macbook-air-m3.webp", Products, 188_416, "MacBook Air M3", "2024-03-10"),
        media(7, "homepage-banner.jpg", Banners, 358_400, "Banner trang chủ", "2024-03-12"),
    ]
}
