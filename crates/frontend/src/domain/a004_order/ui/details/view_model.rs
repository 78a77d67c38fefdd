use crate::shared::crud::form::parse_choice;
use crate::shared::crud::CrudPage;
use contracts::domain::a004_order::aggregate::{
    Customer, Order, OrderForm, PaymentMethod, PaymentStatus,
};
use contracts::error::ValidationError;
use contracts::shared::choice::Choice;
use contracts::shared::time::now_rfc3339;
use leptos::prelude::*;

/// ViewModel формы заказа (покупатель, адрес, оплата)
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub customer_name: RwSignal<String>,
    pub customer_email: RwSignal<String>,
    pub customer_phone: RwSignal<String>,
    pub shipping_address: RwSignal<String>,
    pub payment_status: RwSignal<String>,
    pub payment_method: RwSignal<String>,
    pub tracking_code: RwSignal<String>,
    created_at: StoredValue<String>,
    pub error: RwSignal<Option<String>>,
}

impl OrderDetailsViewModel {
    pub fn new(form: &OrderForm) -> Self {
        let created_at = if form.created_at.is_empty() {
            now_rfc3339()
        } else {
            form.created_at.clone()
        };
        Self {
            customer_name: RwSignal::new(form.customer.name.clone()),
            customer_email: RwSignal::new(form.customer.email.clone()),
            customer_phone: RwSignal::new(form.customer.phone.clone()),
            shipping_address: RwSignal::new(form.shipping_address.clone()),
            payment_status: RwSignal::new(form.payment_status.key().to_string()),
            payment_method: RwSignal::new(form.payment_method.key().to_string()),
            tracking_code: RwSignal::new(form.tracking_code.clone()),
            created_at: StoredValue::new(created_at),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> Result<OrderForm, ValidationError> {
        Ok(OrderForm {
            customer: Customer {
                name: self.customer_name.get_untracked(),
                email: self.customer_email.get_untracked(),
                phone: self.customer_phone.get_untracked(),
            },
            shipping_address: self.shipping_address.get_untracked(),
            payment_status: parse_choice::<PaymentStatus>(
                "paymentStatus",
                &self.payment_status.get_untracked(),
            )?,
            payment_method: parse_choice::<PaymentMethod>(
                "paymentMethod",
                &self.payment_method.get_untracked(),
            )?,
            tracking_code: self.tracking_code.get_untracked(),
            created_at: self.created_at.get_value(),
        })
    }

    pub fn save_command(&self, page: CrudPage<Order>) {
        let result = self
            .to_form()
            .map_err(|e| e.to_string())
            .and_then(|form| page.submit(&form).map_err(|e| e.to_string()));
        self.error.set(result.err());
    }
}
