use super::view_model::ProductDetailsViewModel;
use crate::shared::components::form_field::{choice_select, FormField};
use crate::shared::crud::CrudPage;
use crate::shared::modal::{FormError, Modal, ModalActions};
use contracts::domain::a001_product::aggregate::{Product, ProductForm, ProductStatus};
use leptos::prelude::*;
use thaw::Input;

#[component]
pub fn ProductDetails(
    page: CrudPage<Product>,
    /// Категории, уже встречающиеся в списке (подсказки для ввода)
    #[prop(into)]
    categories: Signal<Vec<String>>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(&page.seed_form::<ProductForm>());
    let title = if page.editing.get_untracked().is_some() {
        "Sửa sản phẩm"
    } else {
        "Thêm sản phẩm"
    };

    let on_close = Callback::new(move |_| page.close());
    let on_save = Callback::new(move |_| vm.save_command(page));

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <FormError error=vm.error />
            <div class="form">
                <FormField label="Tên sản phẩm" required=true>
                    <Input value=vm.name placeholder="VD: iPhone 15 Pro Max" />
                </FormField>
                <FormField label="Danh mục" required=true>
                    <Input value=vm.category attr:list="product-category-options" />
                    <datalist id="product-category-options">
                        {move || categories.get().into_iter().map(|c| view! {
                            <option value=c></option>
                        }).collect_view()}
                    </datalist>
                </FormField>
                <div class="form__row">
                    <FormField label="Giá (₫)">
                        <Input value=vm.price placeholder="0" />
                    </FormField>
                    <FormField label="Tồn kho">
                        <Input value=vm.stock placeholder="0" />
                    </FormField>
                </div>
                <FormField label="Trạng thái">
                    {choice_select::<ProductStatus>(vm.status)}
                </FormField>
            </div>
            <ModalActions on_cancel=on_close on_save=on_save />
        </Modal>
    }
}
