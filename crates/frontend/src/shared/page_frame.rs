//! PageFrame: корневая обёртка каждой страницы панели.
//!
//! На корневом элементе выставляются `id` в формате `"{entity}--{category}"`
//! (например, `"a001_product--list"`) и `data-page-category`.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id в формате `{entity}--{category}`
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_EDITOR => "page page--editor",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
