use super::aggregate::{Product, ProductStatus};

#[allow(clippy::too_many_arguments)]
fn product(
    id: i64,
    name: &str,
    category: &str,
    price: f64,
    stock: u32,
    status: ProductStatus,
    rating: f32,
    sales: u32,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock,
        status,
        rating,
        sales,
    }
}

/// Демонстрационный каталог
pub fn sample_products() -> Vec<Product> {
    use ProductStatus::*;
    vec![
        product(1, "iPhone 15 Pro Max", "Điện thoại", 29_990_000.0, 45, Active, 4.8, 1250),
        product(2, "Samsung Galaxy S24 Ultra", "Điện thoại", 26_990_000.0, 32, Active, 4.7, 980),
        product(3, "MacBook Air M3", "Laptop", 27_490_000.0, 18, Active, 4.9, 640),
        product(4, "Dell XPS 13", "Laptop", 32_990_000.0, 0, OutOfStock, 4.5, 210),
        product(5, "iPad Pro 11 inch", "Máy tính bảng", 23_990_000.0, 7, Active, 4.8, 430),
        product(6, "AirPods Pro 2", "Phụ kiện", 5_990_000.0, 120, Active, 4.6, 2100),
        product(7, "Apple Watch Series 9", "Đồng hồ thông minh", 9_990_000.0, 25, Active, 4.7, 760),
        product(8, "Xiaomi Redmi Note 13", "Điện thoại", 5_490_000.0, 60, Inactive, 4.3, 1530),
        product(9, "Sạc nhanh Anker 65W", "Phụ kiện", 890_000.0, 4, Active, 4.4, 3200),
    ]
}
