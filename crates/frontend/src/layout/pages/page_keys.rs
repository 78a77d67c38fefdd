//! Страницы панели и их стабильные строковые ключи.

/// Страница панели. Ровно одна страница отображается в центральной области.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Products,
    ProductCategories,
    Posts,
    PostCategories,
    Orders,
    Menus,
    AdminUsers,
    Media,
    HomeEditor,
    FieldPositions,
    FieldFormats,
}

impl Page {
    pub const ALL: [Page; 12] = [
        Page::Dashboard,
        Page::Products,
        Page::ProductCategories,
        Page::Posts,
        Page::PostCategories,
        Page::Orders,
        Page::Menus,
        Page::AdminUsers,
        Page::Media,
        Page::HomeEditor,
        Page::FieldPositions,
        Page::FieldFormats,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Products => "products",
            Page::ProductCategories => "product-categories",
            Page::Posts => "posts",
            Page::PostCategories => "post-categories",
            Page::Orders => "orders",
            Page::Menus => "menus",
            Page::AdminUsers => "admin-users",
            Page::Media => "media",
            Page::HomeEditor => "home-editor",
            Page::FieldPositions => "field-positions",
            Page::FieldFormats => "field-formats",
        }
    }

    /// Неизвестный ключ ведёт на главную панель
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|page| page.key() == key)
            .unwrap_or_else(|| {
                log::warn!("unknown page key '{}', falling back to dashboard", key);
                Page::Dashboard
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Tổng quan",
            Page::Products => "Sản phẩm",
            Page::ProductCategories => "Danh mục sản phẩm",
            Page::Posts => "Bài viết",
            Page::PostCategories => "Danh mục bài viết",
            Page::Orders => "Đơn hàng",
            Page::Menus => "Menu",
            Page::AdminUsers => "Người dùng",
            Page::Media => "Thư viện media",
            Page::HomeEditor => "Trang chủ",
            Page::FieldPositions => "Vị trí trường",
            Page::FieldFormats => "Định dạng trường",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "layout-dashboard",
            Page::Products => "package",
            Page::ProductCategories | Page::PostCategories => "folder",
            Page::Posts => "file-text",
            Page::Orders => "shopping-cart",
            Page::Menus => "menu",
            Page::AdminUsers => "users",
            Page::Media => "image",
            Page::HomeEditor => "home",
            Page::FieldPositions => "layout-sidebar",
            Page::FieldFormats => "type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), page);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = Page::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys.len(), Page::ALL.len());
    }

    #[test]
    fn test_unknown_key_falls_back_to_dashboard() {
        assert_eq!(Page::from_key("reports"), Page::Dashboard);
        assert_eq!(Page::from_key(""), Page::Dashboard);
        assert_eq!(Page::from_key("Products"), Page::Dashboard);
    }
}
