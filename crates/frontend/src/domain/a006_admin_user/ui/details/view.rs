use super::view_model::AdminUserDetailsViewModel;
use crate::shared::components::form_field::{choice_select, FormField};
use crate::shared::crud::CrudPage;
use crate::shared::modal::{FormError, Modal, ModalActions};
use contracts::domain::a006_admin_user::aggregate::{
    AdminRole, AdminUser, AdminUserForm, UserStatus,
};
use leptos::prelude::*;
use thaw::Input;

#[component]
pub fn AdminUserDetails(page: CrudPage<AdminUser>) -> impl IntoView {
    let vm = AdminUserDetailsViewModel::new(&page.seed_form::<AdminUserForm>());
    let title = if page.editing.get_untracked().is_some() {
        "Sửa người dùng"
    } else {
        "Thêm người dùng"
    };

    let on_close = Callback::new(move |_| page.close());
    let on_save = Callback::new(move |_| vm.save_command(page));

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <FormError error=vm.error />
            <div class="form">
                <FormField label="Họ tên" required=true>
                    <Input value=vm.name />
                </FormField>
                <FormField label="Email" required=true>
                    <Input value=vm.email placeholder="ten@shop.vn" />
                </FormField>
                <div class="form__row">
                    <FormField label="Vai trò">
                        {choice_select::<AdminRole>(vm.role)}
                    </FormField>
                    <FormField label="Trạng thái">
                        {choice_select::<UserStatus>(vm.status)}
                    </FormField>
                </div>
            </div>
            <ModalActions on_cancel=on_close on_save=on_save />
        </Modal>
    }
}
