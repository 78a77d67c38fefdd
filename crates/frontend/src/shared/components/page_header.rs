use leptos::prelude::*;

/// Заголовок страницы-списка: название, счётчик и кнопки действий
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Подзаголовок (например, счётчик "Hiển thị 3 / 9")
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            <div class="page__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
