use crate::domain::common::{assign_trimmed, Record, RecordForm, RecordId};
use crate::error::{require, ValidationError};
use crate::shared::choice::Choice;
use crate::shared::list_filter::{matches_query, Facet, ListFilter};
use serde::{Deserialize, Serialize};

crate::choice_enum! {
    /// Папка медиатеки
    pub enum MediaFolder {
        Products => ("products", "Sản phẩm"),
        Posts => ("posts", "Bài viết"),
        Banners => ("banners", "Banner"),
    }
}

/// Число файлов в каждой папке, в порядке `MediaFolder::ALL`
pub fn folder_counts(items: &[MediaItem]) -> Vec<(MediaFolder, usize)> {
    MediaFolder::ALL
        .iter()
        .map(|folder| (*folder, items.iter().filter(|m| m.folder == *folder).count()))
        .collect()
}

crate::choice_enum! {
    /// Тип файла в медиатеке
    pub enum MediaKind {
        Image => ("image", "Hình ảnh"),
        Video => ("video", "Video"),
        Document => ("document", "Tài liệu"),
        Other => ("other", "Khác"),
    }
}

impl MediaKind {
    /// Тип по расширению имени файла
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" => MediaKind::Image,
            "mp4" | "webm" | "mov" => MediaKind::Video,
            "pdf" | "doc" | "docx" | "xls" | "xlsx" | "txt" => MediaKind::Document,
            _ => MediaKind::Other,
        }
    }
}

/// Размер файла в человекочитаемом виде: "512 B", "1.5 KB", "2.3 MB"
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Файл медиатеки (загрузка вне рамок панели, хранится только описание)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: RecordId,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub folder: MediaFolder,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    #[serde(rename = "altText", default)]
    pub alt_text: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: String,
}

impl MediaItem {
    pub fn size_label(&self) -> String {
        format_size(self.size_bytes)
    }
}

impl Record for MediaItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "media"
    }

    fn element_name() -> &'static str {
        "Tệp"
    }

    fn list_name() -> &'static str {
        "Thư viện media"
    }
}

/// Регистрация файла по ссылке. Тип определяется по имени файла.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaForm {
    pub file_name: String,
    pub url: String,
    pub folder: MediaFolder,
    pub alt_text: String,
    pub size_bytes: u64,
    pub uploaded_at: String,
}

impl RecordForm for MediaForm {
    type Record = MediaItem;

    fn from_record(record: &MediaItem) -> Self {
        Self {
            file_name: record.file_name.clone(),
            url: record.url.clone(),
            folder: record.folder,
            alt_text: record.alt_text.clone(),
            size_bytes: record.size_bytes,
            uploaded_at: record.uploaded_at.clone(),
        }
    }

    fn create(&self, id: RecordId) -> MediaItem {
        let mut item = MediaItem {
            id,
            file_name: String::new(),
            url: String::new(),
            kind: MediaKind::Other,
            folder: MediaFolder::default(),
            size_bytes: 0,
            alt_text: String::new(),
            uploaded_at: self.uploaded_at.clone(),
        };
        self.apply(&mut item);
        item
    }

    fn apply(&self, record: &mut MediaItem) {
        assign_trimmed(&mut record.file_name, &self.file_name);
        assign_trimmed(&mut record.url, &self.url);
        record.kind = MediaKind::from_file_name(&record.file_name);
        record.folder = self.folder;
        record.alt_text = self.alt_text.clone();
        record.size_bytes = self.size_bytes;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("fileName", &self.file_name)?;
        require("url", &self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaFilter {
    pub query: String,
    pub folder: Facet<MediaFolder>,
    pub kind: Facet<MediaKind>,
}

impl ListFilter<MediaItem> for MediaFilter {
    fn matches(&self, record: &MediaItem) -> bool {
        matches_query(&self.query, &[&record.file_name, &record.alt_text])
            && self.folder.matches(&record.folder)
            && self.kind.matches(&record.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_media::samples::sample_media;
    use crate::domain::common::RecordStore;
    use crate::shared::list_filter::apply_filter;

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(MediaKind::from_file_name("banner.JPG"), MediaKind::Image);
        assert_eq!(MediaKind::from_file_name("intro.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_file_name("bao-gia.pdf"), MediaKind::Document);
        assert_eq!(MediaKind::from_file_name("README"), MediaKind::Other);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_bulk_delete() {
        let mut store = RecordStore::from_items(sample_media());
        let before = store.len();
        assert_eq!(store.remove_many(&[1, 3, 999]), 2);
        assert_eq!(store.len(), before - 2);
        assert!(!store.contains(1));
    }

    #[test]
    fn test_filter_by_folder() {
        let media = sample_media();
        let banners = MediaFilter {
            folder: Facet::Only(MediaFolder::Banners),
            ..Default::default()
        };
        let ids: Vec<RecordId> = apply_filter(&media, &banners).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 7]);

        let banner_query = MediaFilter {
            query: "TẾT".to_string(),
            ..banners
        };
        assert_eq!(apply_filter(&media, &banner_query).len(), 1);
    }

    #[test]
    fn test_folder_counts() {
        let counts = folder_counts(&sample_media());
        assert_eq!(
            counts,
            vec![
                (MediaFolder::Products, 3),
                (MediaFolder::Posts, 2),
                (MediaFolder::Banners, 2),
            ]
        );
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), sample_media().len());
    }

    #[test]
    fn test_edit_moves_to_folder() {
        let mut store = RecordStore::from_items(sample_media());
        let mut form = MediaForm::from_record(store.get(2).unwrap());
        form.folder = MediaFolder::Banners;
        store.update(2, &form).unwrap();
        let moved = store.get(2).unwrap();
        assert_eq!(moved.folder, MediaFolder::Banners);
        assert_eq!(moved.uploaded_at, "2024-02-02");
    }

    #[test]
    fn test_missing_folder_defaults() {
        let row = r#"{"id": 9, "fileName": "a.png", "url": "/uploads/a.png", "type": "image",
            "size": 10, "uploadedAt": "2024-04-01"}"#;
        let item: MediaItem = serde_json::from_str(row).unwrap();
        assert_eq!(item.folder, MediaFolder::Products);
    }

    #[test]
    fn test_filter_images() {
        let media = sample_media();
        let images = MediaFilter {
            kind: Facet::Only(MediaKind::Image),
            ..Default::default()
        };
        let found = apply_filter(&media, &images);
        assert!(found.iter().all(|m| m.kind == MediaKind::Image));
        assert!(found.len() < media.len());
    }
}
