use super::aggregate::{Post, PostStatus};

#[allow(clippy::too_many_arguments)]
fn post(
    id: i64,
    title: &str,
    excerpt: &str,
    category: &str,
    status: PostStatus,
    author: &str,
    publish_date: &str,
    views: u32,
    featured: bool,
    tags: &[&str],
) -> Post {
    // SEO заполнено только у опубликованных записей
    let (seo_title, seo_description) = if status == PostStatus::Published {
        (format!("{title} | TechStore"), excerpt.to_string())
    } else {
        (String::new(), String::new())
    };
    Post {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: format!("{excerpt}\n\nNội dung chi tiết đang được cập nhật."),
        category: category.to_string(),
        status,
        author: author.to_string(),
        publish_date: publish_date.to_string(),
        views,
        featured,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        featured_image: format!("https://images.pexels.com/photos/{0}/pexels-photo-{0}.jpeg", 1_000 + id),
        seo_title,
        seo_description,
    }
}

pub fn sample_posts() -> Vec<Post> {
    use PostStatus::*;
    vec![
        post(
            1,
            "Top 5 điện thoại đáng mua nhất 2024",
            "Tổng hợp những mẫu smartphone nổi bật trong năm.",
            "Đánh giá",
            Published,
            "Nguyễn Văn An",
            "2024-03-15",
            15_420,
            true,
            &["smartphone", "đánh giá"],
        ),
        post(
            2,
            "Hướng dẫn chọn laptop cho sinh viên",
            "Những tiêu chí quan trọng khi chọn laptop học tập.",
            "Hướng dẫn",
            Published,
            "Trần Thị Bình",
            "2024-03-10",
            8_930,
            false,
            &["laptop", "sinh viên"],
        ),
        post(
            3,
            "Khuyến mãi lớn mùa hè",
            "Giảm giá đến 50% cho hàng trăm sản phẩm.",
            "Khuyến mãi",
            Scheduled,
            "Lê Minh Châu",
            "2024-06-01",
            0,
            false,
            &["khuyến mãi", "mùa hè"],
        ),
        post(
            4,
            "So sánh AirPods Pro 2 và Galaxy Buds 2 Pro",
            "Tai nghe nào phù hợp với bạn?",
            "Đánh giá",
            Draft,
            "Nguyễn Văn An",
            "",
            0,
            false,
            &["apple", "samsung", "tai nghe"],
        ),
        post(
            5,
            "Mẹo kéo dài tuổi thọ pin điện thoại",
            "Những thói quen sạc pin đúng cách.",
            "Tin tức",
            Published,
            "Phạm Thu Dung",
            "2024-02-28",
            21_050,
            true,
            &["pin", "mẹo vặt"],
        ),
    ]
}
