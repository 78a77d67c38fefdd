use super::aggregate::{MenuItem, MenuItemKind};

fn item(
    id: i64,
    title: &str,
    url: &str,
    kind: MenuItemKind,
    order: i64,
    parent_id: Option<i64>,
) -> MenuItem {
    MenuItem {
        id,
        title: title.to_string(),
        url: url.to_string(),
        kind,
        order,
        parent_id,
    }
}

/// Главное меню сайта: четыре корня, у "Sản phẩm" два подпункта
pub fn sample_menu_items() -> Vec<MenuItem> {
    use MenuItemKind::*;
    vec![
        item(1, "Trang chủ", "/", Page, 1, None),
        item(2, "Sản phẩm", "/san-pham", Category, 2, None),
        item(3, "Tin tức", "/tin-tuc", Category, 3, None),
        item(4, "Liên hệ", "/lien-he", Page, 4, None),
        item(5, "Điện thoại", "/san-pham/dien-thoai", Category, 1, Some(2)),
        item(6, "Laptop", "/san-pham/laptop", Category, 2, Some(2)),
    ]
}
