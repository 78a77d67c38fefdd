use crate::domain::common::{assign_trimmed, Record, RecordForm, RecordId};
use crate::error::{require, ValidationError};
use crate::shared::list_filter::{matches_query, Facet, ListFilter};
use serde::{Deserialize, Serialize};

crate::choice_enum! {
    pub enum PostStatus {
        Draft => ("draft", "Bản nháp"),
        Published => ("published", "Đã xuất bản"),
        Scheduled => ("scheduled", "Hẹn giờ"),
    }
}

/// Запись блога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub status: PostStatus,
    pub author: String,
    /// Дата публикации `YYYY-MM-DD` (пустая у черновиков)
    #[serde(rename = "publishDate")]
    pub publish_date: String,
    pub views: u32,
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Обложка записи (URL)
    #[serde(rename = "featuredImage", default)]
    pub featured_image: String,
    #[serde(rename = "seoTitle", default)]
    pub seo_title: String,
    #[serde(rename = "seoDescription", default)]
    pub seo_description: String,
}

/// Разбор строки тегов "a, b ,c": пустые элементы и повторы отбрасываются
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

impl Record for Post {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "post"
    }

    fn element_name() -> &'static str {
        "Bài viết"
    }

    fn list_name() -> &'static str {
        "Bài viết"
    }
}

/// Форма записи. Просмотры не редактируются.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub status: PostStatus,
    pub author: String,
    pub publish_date: String,
    pub featured: bool,
    pub tags: Vec<String>,
    pub featured_image: String,
    pub seo_title: String,
    pub seo_description: String,
}

impl PostForm {
    /// Сохранение черновиком: статус принудительно `Draft`, дата не нужна
    pub fn as_draft(mut self) -> Self {
        self.status = PostStatus::Draft;
        self
    }
}

impl RecordForm for PostForm {
    type Record = Post;

    fn from_record(record: &Post) -> Self {
        Self {
            title: record.title.clone(),
            excerpt: record.excerpt.clone(),
            content: record.content.clone(),
            category: record.category.clone(),
            status: record.status,
            author: record.author.clone(),
            publish_date: record.publish_date.clone(),
            featured: record.featured,
            tags: record.tags.clone(),
            featured_image: record.featured_image.clone(),
            seo_title: record.seo_title.clone(),
            seo_description: record.seo_description.clone(),
        }
    }

    fn create(&self, id: RecordId) -> Post {
        let mut post = Post {
            id,
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: String::new(),
            status: PostStatus::Draft,
            author: String::new(),
            publish_date: String::new(),
            views: 0,
            featured: false,
            tags: Vec::new(),
            featured_image: String::new(),
            seo_title: String::new(),
            seo_description: String::new(),
        };
        self.apply(&mut post);
        post
    }

    fn apply(&self, record: &mut Post) {
        assign_trimmed(&mut record.title, &self.title);
        record.excerpt = self.excerpt.clone();
        record.content = self.content.clone();
        record.category = self.category.clone();
        record.status = self.status;
        record.author = self.author.clone();
        record.publish_date = self.publish_date.clone();
        record.featured = self.featured;
        record.tags = self.tags.clone();
        assign_trimmed(&mut record.featured_image, &self.featured_image);
        record.seo_title = self.seo_title.clone();
        record.seo_description = self.seo_description.clone();
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("category", &self.category)?;
        require("author", &self.author)?;
        if self.status == PostStatus::Scheduled {
            require("publishDate", &self.publish_date)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    pub query: String,
    pub category: Facet<String>,
    pub status: Facet<PostStatus>,
}

impl ListFilter<Post> for PostFilter {
    fn matches(&self, record: &Post) -> bool {
        (matches_query(&self.query, &[&record.title, &record.excerpt, &record.author])
            || record.tags.iter().any(|t| matches_query(&self.query, &[t.as_str()])))
            && self.category.matches_str(&record.category)
            && self.status.matches(&record.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_post::samples::sample_posts;
    use crate::domain::common::RecordStore;
    use crate::shared::list_filter::apply_filter;

    #[test]
    fn test_status_filter() {
        let posts = sample_posts();
        let filter = PostFilter {
            status: Facet::Only(PostStatus::Draft),
            ..Default::default()
        };
        let drafts = apply_filter(&posts, &filter);
        assert!(!drafts.is_empty());
        assert!(drafts.iter().all(|p| p.status == PostStatus::Draft));
    }

    #[test]
    fn test_scheduled_requires_date() {
        let form = PostForm {
            title: "Khuyến mãi Tết".to_string(),
            category: "Khuyến mãi".to_string(),
            author: "Lan".to_string(),
            status: PostStatus::Scheduled,
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Required { field: "publishDate" })
        );
    }

    #[test]
    fn test_toggle_featured_via_modify() {
        let mut store = RecordStore::from_items(sample_posts());
        let before = store.get(2).map(|p| p.featured).unwrap();
        store
            .modify(2, |post| {
                post.featured = !post.featured;
                Ok(())
            })
            .unwrap();
        assert_eq!(store.get(2).map(|p| p.featured), Some(!before));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(&sample_posts()[0]).unwrap();
        assert!(json.get("publishDate").is_some());
        assert!(json.get("seoTitle").is_some());
        assert!(json.get("featuredImage").is_some());
        assert_eq!(json["status"], "published");
    }

    #[test]
    fn test_save_as_draft_overrides_status() {
        let mut store = RecordStore::from_items(sample_posts());
        let form = PostForm {
            title: "Khuyến mãi Tết".to_string(),
            category: "Khuyến mãi".to_string(),
            author: "Lan".to_string(),
            status: PostStatus::Scheduled,
            ..Default::default()
        }
        .as_draft();
        assert!(form.validate().is_ok());
        let id = store.create(&form).unwrap();
        assert_eq!(store.get(id).map(|p| p.status), Some(PostStatus::Draft));

        let published = PostForm::from_record(store.get(1).unwrap()).as_draft();
        store.update(1, &published).unwrap();
        assert_eq!(store.get(1).map(|p| p.status), Some(PostStatus::Draft));
    }

    #[test]
    fn test_unchanged_edit_keeps_tags_and_seo() {
        let mut store = RecordStore::from_items(sample_posts());
        let original = store.get(1).cloned().unwrap();
        assert!(!original.tags.is_empty());
        assert!(!original.seo_title.is_empty());

        let mut form = PostForm::from_record(&original);
        form.tags = parse_tags(&join_tags(&original.tags));
        store.update(1, &form).unwrap();
        assert_eq!(store.get(1), Some(&original));
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(" iphone, review,, iphone ,android "),
            vec!["iphone", "review", "android"]
        );
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn test_query_matches_tag() {
        let posts = sample_posts();
        let filter = PostFilter {
            query: "SAMSUNG".to_string(),
            ..Default::default()
        };
        let ids: Vec<_> = apply_filter(&posts, &filter).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4]);
    }
}
