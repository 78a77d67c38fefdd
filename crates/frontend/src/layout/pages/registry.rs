//! Реестр страниц: единственное место, где `Page` сопоставляется с компонентом.

use super::Page;
use crate::dashboards::OverviewDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_post::ui::list::PostList;
use crate::domain::a003_category::ui::list::CategoryList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_menu_item::ui::list::MenuList;
use crate::domain::a006_admin_user::ui::list::AdminUserList;
use crate::domain::a007_media::ui::list::MediaList;
use crate::domain::a008_field_definition::ui::list::{FieldFormatList, FieldPositionList};
use crate::domain::a009_home_section::ui::editor::HomeEditor;
use contracts::domain::a003_category::aggregate::CategoryVariant;
use leptos::prelude::*;

/// Рендерит компонент текущей страницы.
///
/// Каждый вызов создаёт страницу заново, поэтому её локальное состояние
/// (фильтры, несохранённые правки) сбрасывается при переходе.
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),

        // Каталог
        Page::Products => view! { <ProductList /> }.into_any(),
        Page::ProductCategories => {
            view! { <CategoryList variant=CategoryVariant::Product /> }.into_any()
        }

        // Контент
        Page::Posts => view! { <PostList /> }.into_any(),
        Page::PostCategories => view! { <CategoryList variant=CategoryVariant::Post /> }.into_any(),
        Page::Media => view! { <MediaList /> }.into_any(),
        Page::HomeEditor => view! { <HomeEditor /> }.into_any(),
        Page::Menus => view! { <MenuList /> }.into_any(),

        Page::Orders => view! { <OrderList /> }.into_any(),
        Page::AdminUsers => view! { <AdminUserList /> }.into_any(),

        // Справочники полей
        Page::FieldPositions => view! { <FieldPositionList /> }.into_any(),
        Page::FieldFormats => view! { <FieldFormatList /> }.into_any(),
    }
}
