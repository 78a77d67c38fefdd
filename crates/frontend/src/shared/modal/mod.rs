use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Модальное окно формы.
///
/// Закрывается кнопкой ×, кликом по подложке и клавишей Escape; во всех
/// трёх случаях вызывается `on_close`.
#[component]
pub fn Modal(
    #[prop(into)]
    title: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Подвал формы: Отмена, (Черновик) и Сохранить
#[component]
pub fn ModalActions(
    on_cancel: Callback<()>,
    on_save: Callback<()>,
    #[prop(optional)]
    on_draft: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="modal-footer">
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                "Hủy"
            </Button>
            {on_draft.map(|on_draft| view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_draft.run(())>
                    {icon("save")}
                    " Lưu nháp"
                </Button>
            })}
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                {icon("save")}
                " Lưu"
            </Button>
        </div>
    }
}

/// Блок ошибки формы
#[component]
pub fn FormError(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div class="form__error" role="alert">
                {icon("alert")}
                <span>{e}</span>
            </div>
        })}
    }
}
