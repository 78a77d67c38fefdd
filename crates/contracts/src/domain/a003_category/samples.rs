use super::aggregate::{Category, CategoryVariant};

fn category(
    id: i64,
    name: &str,
    slug: &str,
    description: &str,
    parent_id: Option<i64>,
    count: u32,
) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        parent_id,
        count,
    }
}

pub fn sample_categories(variant: CategoryVariant) -> Vec<Category> {
    match variant {
        CategoryVariant::Product => vec![
            category(1, "Điện thoại", "dien-thoai", "Điện thoại di động các hãng", None, 156),
            category(2, "Laptop", "laptop", "Máy tính xách tay", None, 89),
            category(3, "Điện thoại iPhone", "dien-thoai-iphone", "Các dòng iPhone", Some(1), 42),
            category(4, "Laptop gaming", "laptop-gaming", "Laptop cấu hình cao", Some(2), 23),
        ],
        CategoryVariant::Post => vec![
            category(1, "Tin tức", "tin-tuc", "Tin tức công nghệ mới nhất", None, 45),
            category(2, "Đánh giá", "danh-gia", "Đánh giá sản phẩm chi tiết", None, 32),
            category(3, "Hướng dẫn", "huong-dan", "Mẹo và hướng dẫn sử dụng", None, 28),
            category(4, "Khuyến mãi", "khuyen-mai", "Chương trình ưu đãi", Some(1), 12),
        ],
    }
}
