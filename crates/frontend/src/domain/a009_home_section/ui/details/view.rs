use super::view_model::HomeSectionDetailsViewModel;
use crate::shared::components::form_field::{choice_select, FormField};
use crate::shared::crud::CrudPage;
use crate::shared::modal::{FormError, Modal, ModalActions};
use contracts::domain::a009_home_section::aggregate::{HomeSection, HomeSectionKind};
use leptos::prelude::*;
use thaw::{Checkbox, Input};

#[component]
pub fn HomeSectionDetails(page: CrudPage<HomeSection>) -> impl IntoView {
    let vm = HomeSectionDetailsViewModel::new(page);
    let title = if page.editing.get_untracked().is_some() {
        "Sửa khối"
    } else {
        "Thêm khối"
    };

    let on_close = Callback::new(move |_| page.close());
    let on_save = Callback::new(move |_| vm.save_command(page));

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <FormError error=vm.error />
            <div class="form">
                <FormField label="Loại khối">
                    {choice_select::<HomeSectionKind>(vm.kind)}
                </FormField>
                <FormField label="Tiêu đề" required=true>
                    <Input value=vm.title />
                </FormField>
                <FormField label="Mô tả ngắn">
                    <Input value=vm.subtitle />
                </FormField>
                <Checkbox checked=vm.visible label="Hiển thị trên trang chủ" />
            </div>
            <ModalActions on_cancel=on_close on_save=on_save />
        </Modal>
    }
}
