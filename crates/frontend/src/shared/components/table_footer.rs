use crate::shared::crud::counter_label;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Подвал таблицы: счётчик строк и переключатель страниц.
///
/// Все строки выводятся на одной странице, кнопки листания неактивны.
#[component]
pub fn TableFooter(
    #[prop(into)]
    visible: Signal<usize>,
    #[prop(into)]
    total: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="table-footer">
            <span class="table-footer__counter">
                {move || counter_label(visible.get(), total.get())}
            </span>
            <div class="pagination-controls">
                <button class="pagination-btn" disabled=true title="Trang trước">
                    <span style="display: inline-flex; transform: rotate(180deg);">{icon("chevron-right")}</span>
                </button>
                <span class="pagination-info">"Trang 1 / 1"</span>
                <button class="pagination-btn" disabled=true title="Trang sau">
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
