//! Статическое дерево меню боковой панели.

use crate::layout::pages::Page;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub pages: &'static [Page],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEntry {
    Leaf(Page),
    Group(MenuGroup),
}

const MENU: &[MenuEntry] = &[
    MenuEntry::Leaf(Page::Dashboard),
    MenuEntry::Group(MenuGroup {
        id: "catalog",
        label: "Sản phẩm",
        icon: "package",
        pages: &[Page::Products, Page::ProductCategories],
    }),
    MenuEntry::Leaf(Page::Orders),
    MenuEntry::Group(MenuGroup {
        id: "content",
        label: "Nội dung",
        icon: "file-text",
        pages: &[Page::Posts, Page::PostCategories, Page::Media],
    }),
    MenuEntry::Group(MenuGroup {
        id: "appearance",
        label: "Giao diện",
        icon: "layout-top",
        pages: &[Page::HomeEditor, Page::Menus],
    }),
    MenuEntry::Group(MenuGroup {
        id: "system",
        label: "Hệ thống",
        icon: "settings",
        pages: &[Page::AdminUsers, Page::FieldPositions, Page::FieldFormats],
    }),
];

pub fn menu_entries() -> &'static [MenuEntry] {
    MENU
}

pub fn groups() -> impl Iterator<Item = &'static MenuGroup> {
    MENU.iter().filter_map(|entry| match entry {
        MenuEntry::Group(group) => Some(group),
        MenuEntry::Leaf(_) => None,
    })
}

/// Группа, в которой находится страница (None для страниц верхнего уровня)
pub fn group_of(page: Page) -> Option<&'static str> {
    groups()
        .find(|group| group.pages.contains(&page))
        .map(|group| group.id)
}

/// Список раскрытых групп из хранилища: неизвестные и повторные id отбрасываются
pub fn sanitize_expanded(stored: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for id in stored {
        if groups().any(|group| group.id == id) && !result.contains(&id) {
            result.push(id);
        }
    }
    result
}

/// Раскрыть/свернуть группу
pub fn toggle_id(expanded: &mut Vec<String>, id: &str) {
    if let Some(pos) = expanded.iter().position(|x| x == id) {
        expanded.remove(pos);
    } else {
        expanded.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_is_in_menu_once() {
        for page in Page::ALL {
            let leaves = menu_entries()
                .iter()
                .filter(|e| matches!(e, MenuEntry::Leaf(p) if *p == page))
                .count();
            let grouped = groups().filter(|g| g.pages.contains(&page)).count();
            assert_eq!(leaves + grouped, 1, "page {:?}", page);
        }
    }

    #[test]
    fn test_group_of() {
        assert_eq!(group_of(Page::Products), Some("catalog"));
        assert_eq!(group_of(Page::FieldFormats), Some("system"));
        assert_eq!(group_of(Page::Dashboard), None);
    }

    #[test]
    fn test_sanitize_expanded() {
        let stored = vec![
            "content".to_string(),
            "reports".to_string(),
            "content".to_string(),
            "system".to_string(),
        ];
        assert_eq!(sanitize_expanded(stored), vec!["content", "system"]);
    }

    #[test]
    fn test_toggle_id() {
        let mut expanded = vec!["catalog".to_string()];
        toggle_id(&mut expanded, "system");
        assert_eq!(expanded, vec!["catalog", "system"]);
        toggle_id(&mut expanded, "catalog");
        assert_eq!(expanded, vec!["system"]);
    }
}
