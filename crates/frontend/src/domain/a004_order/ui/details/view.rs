use super::view_model::OrderDetailsViewModel;
use crate::shared::components::form_field::{choice_select, FormField};
use crate::shared::crud::CrudPage;
use crate::shared::modal::{FormError, Modal, ModalActions};
use contracts::domain::a004_order::aggregate::{Order, OrderForm, PaymentMethod, PaymentStatus};
use leptos::prelude::*;
use thaw::{Input, Textarea};

#[component]
pub fn OrderDetails(page: CrudPage<Order>) -> impl IntoView {
    let vm = OrderDetailsViewModel::new(&page.seed_form::<OrderForm>());
    let title = match page.editing.get_untracked().and_then(|id| page.get(id)) {
        Some(order) => format!("Sửa đơn hàng {}", order.code),
        None => "Tạo đơn hàng".to_string(),
    };

    let on_close = Callback::new(move |_| page.close());
    let on_save = Callback::new(move |_| vm.save_command(page));

    view! {
        <Modal title=title on_close=on_close>
            <FormError error=vm.error />
            <div class="form">
                <h4 class="form__section">"Khách hàng"</h4>
                <FormField label="Họ tên" required=true>
                    <Input value=vm.customer_name />
                </FormField>
                <div class="form__row">
                    <FormField label="Email">
                        <Input value=vm.customer_email placeholder="khach@example.com" />
                    </FormField>
                    <FormField label="Số điện thoại" required=true>
                        <Input value=vm.customer_phone placeholder="09xxxxxxxx" />
                    </FormField>
                </div>
                <FormField label="Địa chỉ giao hàng" required=true>
                    <Textarea value=vm.shipping_address />
                </FormField>
                <FormField label="Mã vận đơn">
                    <Input value=vm.tracking_code placeholder="VN123456789" />
                </FormField>
                <h4 class="form__section">"Thanh toán"</h4>
                <div class="form__row">
                    <FormField label="Trạng thái thanh toán">
                        {choice_select::<PaymentStatus>(vm.payment_status)}
                    </FormField>
                    <FormField label="Phương thức">
                        {choice_select::<PaymentMethod>(vm.payment_method)}
                    </FormField>
                </div>
            </div>
            <ModalActions on_cancel=on_close on_save=on_save />
        </Modal>
    }
}
