use crate::shared::icons::icon;
use leptos::prelude::*;

/// Цветовая окраска карточки показателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Good => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Bad => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Подпись над значением
    label: &'static str,
    /// Имя иконки для `icon()`
    icon_name: &'static str,
    /// Уже отформатированное значение
    #[prop(into)]
    value: Signal<String>,
    #[prop(into, optional)]
    tone: Signal<StatTone>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class=move || tone.get().class()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
