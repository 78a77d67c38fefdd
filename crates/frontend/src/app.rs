use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // Конфигурация нужна странице товаров (удалённый источник)
    provide_context(config.clone());
    // Текущая страница и раскрытые группы меню
    provide_context(AppGlobalContext::new(&config));

    view! {
        <MainLayout />
    }
}
