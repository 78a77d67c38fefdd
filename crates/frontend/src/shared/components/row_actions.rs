use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Кнопки строки таблицы: редактировать и удалить. Дополнительные кнопки
/// (быстрые действия) передаются через `children` и выводятся первыми.
#[component]
pub fn RowActions(
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
            <div class="row-actions">
                {children.map(|c| c())}
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_edit.run(())
                    attr:title="Sửa"
                >
                    {icon("edit")}
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_delete.run(())
                    attr:title="Xóa"
                >
                    {icon("delete")}
                </Button>
            </div>
        </td>
    }
}
