//! Application Shell - основной layout панели (Shell + Sidebar + текущая страница)

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::pages::render_page;
use crate::layout::Shell;
use leptos::prelude::*;

/// Рендерит ровно одну страницу: ту, что выбрана в `AppGlobalContext`.
#[component]
pub fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || render_page(ctx.current_page.get())}
                }
                .into_any()
            }
        />
    }
}
