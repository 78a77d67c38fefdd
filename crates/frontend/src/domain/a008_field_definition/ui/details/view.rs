use super::view_model::FieldDefinitionDetailsViewModel;
use crate::shared::components::form_field::{choice_select, FormField};
use crate::shared::crud::CrudPage;
use crate::shared::modal::{FormError, Modal, ModalActions};
use contracts::domain::a008_field_definition::aggregate::{FieldDefinition, FieldKind};
use contracts::domain::common::ActiveStatus;
use leptos::prelude::*;
use thaw::{Input, Textarea};

#[component]
pub fn FieldDefinitionDetails<K: FieldKind>(page: CrudPage<FieldDefinition<K>>) -> impl IntoView {
    let vm = FieldDefinitionDetailsViewModel::new(page);
    let title = if page.editing.get_untracked().is_some() {
        format!("Sửa {}", K::ELEMENT.to_lowercase())
    } else {
        format!("Thêm {}", K::ELEMENT.to_lowercase())
    };

    let on_close = Callback::new(move |_| page.close());
    let on_save = Callback::new(move |_| vm.save_command(page));

    view! {
        <Modal title=title on_close=on_close>
            <FormError error=vm.error />
            <div class="form">
                <FormField label="Tên" required=true>
                    <Input value=vm.name />
                </FormField>
                <FormField label="Mã" required=true>
                    <Input value=vm.code placeholder="tu_dong_tao_tu_ten" />
                </FormField>
                <div class="form__row">
                    <FormField label="Loại">
                        {choice_select::<K>(vm.kind)}
                    </FormField>
                    <FormField label="Trạng thái">
                        {choice_select::<ActiveStatus>(vm.status)}
                    </FormField>
                </div>
                <FormField label="Mô tả">
                    <Textarea value=vm.description />
                </FormField>
            </div>
            <ModalActions on_cancel=on_close on_save=on_save />
        </Modal>
    }
}
