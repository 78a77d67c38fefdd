use super::view_model::MenuItemDetailsViewModel;
use crate::shared::components::form_field::{choice_select, FormField};
use crate::shared::crud::CrudPage;
use crate::shared::modal::{FormError, Modal, ModalActions};
use contracts::domain::a005_menu_item::aggregate::{MenuItem, MenuItemKind};
use leptos::prelude::*;
use thaw::{Input, Select};

#[component]
pub fn MenuItemDetails(page: CrudPage<MenuItem>) -> impl IntoView {
    let vm = MenuItemDetailsViewModel::new(page);
    let title = if page.editing.get_untracked().is_some() {
        "Sửa mục menu"
    } else {
        "Thêm mục menu"
    };
    let parents = page.parent_options(|item| item.title.clone());

    let on_close = Callback::new(move |_| page.close());
    let on_save = Callback::new(move |_| vm.save_command(page));

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <FormError error=vm.error />
            <div class="form">
                <FormField label="Tiêu đề" required=true>
                    <Input value=vm.title />
                </FormField>
                <FormField label="Đường dẫn" required=true>
                    <Input value=vm.url placeholder="/san-pham" />
                </FormField>
                <div class="form__row">
                    <FormField label="Loại">
                        {choice_select::<MenuItemKind>(vm.kind)}
                    </FormField>
                    <FormField label="Thứ tự">
                        <Input value=vm.order />
                    </FormField>
                </div>
                <FormField label="Mục cha">
                    <Select value=vm.parent>
                        <option value="">"— Không có (cấp gốc) —"</option>
                        {parents.into_iter().map(|(id, label)| view! {
                            <option value=id.to_string()>{label}</option>
                        }).collect_view()}
                    </Select>
                </FormField>
            </div>
            <ModalActions on_cancel=on_close on_save=on_save />
        </Modal>
    }
}
