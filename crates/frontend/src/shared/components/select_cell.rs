use crate::shared::crud::CrudPage;
use contracts::domain::common::{Record, RecordId};
use leptos::prelude::*;

/// Ячейка с чекбоксом выделения строки. Клик не всплывает до строки.
#[component]
pub fn SelectCell<R: Record>(page: CrudPage<R>, id: RecordId) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || page.is_selected(id)
                on:change=move |ev| page.toggle_select(id, event_target_checked(&ev))
            />
        </td>
    }
}

/// Чекбокс "выделить все видимые" в заголовке таблицы
#[component]
pub fn SelectAllCell<R: Record>(
    page: CrudPage<R>,
    #[prop(into)]
    visible_ids: Signal<Vec<RecordId>>,
) -> impl IntoView {
    let all_checked = move || {
        let ids = visible_ids.get();
        !ids.is_empty() && ids.iter().all(|id| page.is_selected(*id))
    };
    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=all_checked
                on:change=move |ev| page.select_all(visible_ids.get_untracked(), event_target_checked(&ev))
            />
        </th>
    }
}
