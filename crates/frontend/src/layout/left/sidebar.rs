//! Боковое меню со сворачиваемыми группами

use super::menu::{menu_entries, MenuEntry, MenuGroup};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::Page;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
fn MenuLeaf(page: Page, #[prop(optional)] nested: bool) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--nested=nested
            class:app-sidebar__item--active=move || ctx.current_page.get() == page
            on:click=move |_| ctx.navigate(page)
        >
            <div class="app-sidebar__item-content">
                {icon(page.icon())}
                <span>{page.label()}</span>
            </div>
        </div>
    }
}

#[component]
fn MenuGroupItem(group: MenuGroup) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let id = group.id;
    let contains_current = move || group.pages.contains(&ctx.current_page.get());

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--within=contains_current
                on:click=move |_| ctx.toggle_group(id)
            >
                <div class="app-sidebar__item-content">
                    {icon(group.icon)}
                    <span>{group.label}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=move || ctx.is_expanded(id)
                >
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=move || ctx.is_expanded(id)>
                <div class="app-sidebar__children">
                    {group.pages.iter().map(|page| view! {
                        <MenuLeaf page=*page nested=true />
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__brand">
                {icon("shopping-cart")}
                <span>"Shop Admin"</span>
            </div>
            {menu_entries().iter().map(|entry| match entry {
                MenuEntry::Leaf(page) => view! { <MenuLeaf page=*page /> }.into_any(),
                MenuEntry::Group(group) => view! { <MenuGroupItem group=*group /> }.into_any(),
            }).collect_view()}
        </nav>
    }
}
