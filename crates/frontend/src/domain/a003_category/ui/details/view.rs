use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::form_field::FormField;
use crate::shared::crud::CrudPage;
use crate::shared::modal::{FormError, Modal, ModalActions};
use contracts::domain::a003_category::aggregate::{Category, CategoryForm};
use leptos::prelude::*;
use thaw::{Input, Select, Textarea};

#[component]
pub fn CategoryDetails(page: CrudPage<Category>) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(&page.seed_form::<CategoryForm>());
    vm.bind_slug(page);

    let title = if page.editing.get_untracked().is_some() {
        "Sửa danh mục"
    } else {
        "Thêm danh mục"
    };
    let parents = page.parent_options(|c| c.name.clone());

    let on_close = Callback::new(move |_| page.close());
    let on_save = Callback::new(move |_| vm.save_command(page));

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <FormError error=vm.error />
            <div class="form">
                <FormField label="Tên danh mục" required=true>
                    <Input value=vm.name />
                </FormField>
                <FormField label="Slug" required=true>
                    <Input value=vm.slug placeholder="tu-dong-tao-tu-ten" />
                </FormField>
                <FormField label="Danh mục cha">
                    <Select value=vm.parent>
                        <option value="">"— Không có (cấp gốc) —"</option>
                        {parents.into_iter().map(|(id, label)| view! {
                            <option value=id.to_string()>{label}</option>
                        }).collect_view()}
                    </Select>
                </FormField>
                <FormField label="Mô tả">
                    <Textarea value=vm.description />
                </FormField>
            </div>
            <ModalActions on_cancel=on_close on_save=on_save />
        </Modal>
    }
}
