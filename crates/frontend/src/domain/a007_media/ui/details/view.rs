use super::view_model::MediaDetailsViewModel;
use crate::shared::components::form_field::{choice_select, FormField};
use crate::shared::crud::CrudPage;
use crate::shared::modal::{FormError, Modal, ModalActions};
use contracts::domain::a007_media::aggregate::{MediaFolder, MediaForm, MediaItem, MediaKind};
use contracts::shared::choice::Choice;
use leptos::prelude::*;
use thaw::Input;

#[component]
pub fn MediaDetails(page: CrudPage<MediaItem>) -> impl IntoView {
    let vm = MediaDetailsViewModel::new(&page.seed_form::<MediaForm>());
    let title = if page.editing.get_untracked().is_some() {
        "Sửa tệp"
    } else {
        "Thêm tệp"
    };
    let detected_kind = move || MediaKind::from_file_name(&vm.file_name.get()).label();

    let on_close = Callback::new(move |_| page.close());
    let on_save = Callback::new(move |_| vm.save_command(page));

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <FormError error=vm.error />
            <div class="form">
                <FormField label="Tên tệp" required=true>
                    <Input value=vm.file_name placeholder="banner-tet.jpg" />
                    <div class="form__hint">"Loại: " {detected_kind}</div>
                </FormField>
                <FormField label="Đường dẫn" required=true>
                    <Input value=vm.url />
                </FormField>
                <FormField label="Thư mục">
                    {choice_select::<MediaFolder>(vm.folder)}
                </FormField>
                <FormField label="Văn bản thay thế (alt)">
                    <Input value=vm.alt_text />
                </FormField>
                <FormField label="Dung lượng (byte)">
                    <Input value=vm.size_bytes />
                </FormField>
            </div>
            <ModalActions on_cancel=on_close on_save=on_save />
        </Modal>
    }
}
