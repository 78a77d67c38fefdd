use super::view_model::PostDetailsViewModel;
use crate::shared::components::form_field::{choice_select, FormField};
use crate::shared::crud::CrudPage;
use crate::shared::modal::{FormError, Modal, ModalActions};
use contracts::domain::a002_post::aggregate::{Post, PostForm, PostStatus};
use leptos::prelude::*;
use thaw::{Checkbox, Input, Textarea};

#[component]
pub fn PostDetails(
    page: CrudPage<Post>,
    #[prop(into)]
    categories: Signal<Vec<String>>,
) -> impl IntoView {
    let vm = PostDetailsViewModel::new(&page.seed_form::<PostForm>());
    let title = if page.editing.get_untracked().is_some() {
        "Sửa bài viết"
    } else {
        "Viết bài mới"
    };

    let on_close = Callback::new(move |_| page.close());
    let on_save = Callback::new(move |_| vm.save_command(page));
    let on_draft = Callback::new(move |_| vm.save_draft_command(page));

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <FormError error=vm.error />
            <div class="form">
                <FormField label="Tiêu đề" required=true>
                    <Input value=vm.title />
                </FormField>
                <FormField label="Tóm tắt">
                    <Textarea value=vm.excerpt />
                </FormField>
                <FormField label="Nội dung">
                    <Textarea value=vm.content attr:rows="6" />
                </FormField>
                <div class="form__row">
                    <FormField label="Danh mục" required=true>
                        <Input value=vm.category attr:list="post-category-options" />
                        <datalist id="post-category-options">
                            {move || categories.get().into_iter().map(|c| view! {
                                <option value=c></option>
                            }).collect_view()}
                        </datalist>
                    </FormField>
                    <FormField label="Tác giả" required=true>
                        <Input value=vm.author />
                    </FormField>
                </div>
                <div class="form__row">
                    <FormField label="Trạng thái">
                        {choice_select::<PostStatus>(vm.status)}
                    </FormField>
                    <FormField label="Ngày đăng">
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || vm.publish_date.get()
                            on:input=move |ev| vm.publish_date.set(event_target_value(&ev))
                        />
                    </FormField>
                </div>
                <FormField label="Thẻ">
                    <Input value=vm.tags placeholder="iphone, đánh giá, ..." />
                </FormField>
                <FormField label="Ảnh đại diện">
                    <Input value=vm.featured_image placeholder="https://..." />
                </FormField>
                {move || {
                    let url = vm.featured_image.get();
                    (!url.trim().is_empty()).then(|| view! {
                        <img class="form__image-preview" src=url alt="" />
                    })
                }}
                <Checkbox checked=vm.featured label="Bài viết nổi bật" />
                <fieldset class="form__group">
                    <legend>"SEO"</legend>
                    <FormField label="Tiêu đề SEO">
                        <Input value=vm.seo_title />
                    </FormField>
                    <FormField label="Mô tả SEO">
                        <Textarea value=vm.seo_description attr:rows="2" />
                    </FormField>
                </fieldset>
            </div>
            <ModalActions on_cancel=on_close on_save=on_save on_draft=on_draft />
        </Modal>
    }
}
