use crate::shared::list_utils::choice_options;
use contracts::shared::choice::Choice;
use leptos::prelude::*;
use thaw::Select;

/// Подпись + поле формы
#[component]
pub fn FormField(
    label: &'static str,
    /// Звёздочка обязательного поля
    #[prop(optional)]
    required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {children()}
        </div>
    }
}

/// Select со всеми вариантами перечисления `T`
pub fn choice_select<T: Choice>(value: RwSignal<String>) -> impl IntoView {
    view! {
        <Select value=value>
            {choice_options::<T>().into_iter().map(|(key, label)| view! {
                <option value=key>{label}</option>
            }).collect_view()}
        </Select>
    }
}
