//! CardAnimated: обёртка над Thaw Card с анимацией появления
//! (`@keyframes card-appear`). `delay_ms` задаёт каскадную задержку.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Заголовок карточки
    #[prop(optional)]
    title: &'static str,
    /// Задержка анимации в миллисекундах
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style>
            {(!title.is_empty()).then(|| view! { <h3 class="card__title">{title}</h3> })}
            {children()}
        </Card>
    }
}
