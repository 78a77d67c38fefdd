use crate::domain::common::{assign_trimmed, Record, RecordForm, RecordId};
use crate::error::{require, ValidationError};
use crate::shared::choice::Choice;
use crate::shared::list_filter::{matches_query, Facet, ListFilter};
use serde::{Deserialize, Serialize};

crate::choice_enum! {
    /// Статус выполнения заказа
    pub enum OrderStatus {
        Pending => ("pending", "Chờ xác nhận"),
        Processing => ("processing", "Đang xử lý"),
        Shipped => ("shipped", "Đang giao"),
        Delivered => ("delivered", "Đã giao"),
        Cancelled => ("cancelled", "Đã hủy"),
    }
}

crate::choice_enum! {
    pub enum PaymentStatus {
        Pending => ("pending", "Chưa thanh toán"),
        Paid => ("paid", "Đã thanh toán"),
        Refunded => ("refunded", "Đã hoàn tiền"),
        Failed => ("failed", "Thất bại"),
    }
}

crate::choice_enum! {
    pub enum PaymentMethod {
        Cod => ("cod", "Thanh toán khi nhận hàng"),
        BankTransfer => ("bank_transfer", "Chuyển khoản"),
        Card => ("card", "Thẻ tín dụng"),
        EWallet => ("e_wallet", "Ví điện tử"),
    }
}

impl OrderStatus {
    /// Из терминального статуса переходов нет
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "productName")]
    pub product_name: String,
    pub quantity: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub discount: f64,
    pub total: f64,
}

impl OrderTotals {
    /// Итог = сумма строк + доставка − скидка, не меньше нуля
    pub fn compute(lines: &[OrderLine], shipping: f64, discount: f64) -> Self {
        let subtotal: f64 = lines.iter().map(OrderLine::line_total).sum();
        Self {
            subtotal,
            shipping,
            discount,
            total: (subtotal + shipping - discount).max(0.0),
        }
    }
}

/// Шаг истории статусов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub status: OrderStatus,
    pub note: String,
    pub at: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,
    /// Номер заказа для людей, например "DH00042"
    pub code: String,
    pub customer: Customer,
    pub items: Vec<OrderLine>,
    pub totals: OrderTotals,
    #[serde(rename = "paymentStatus")]
    pub payment_status: PaymentStatus,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    #[serde(rename = "shippingAddress")]
    pub shipping_address: String,
    pub timeline: Vec<TimelineStep>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Код отслеживания; пустой, пока заказ не передан перевозчику
    #[serde(rename = "trackingCode", default)]
    pub tracking_code: String,
}

impl Order {
    pub fn code_for(id: RecordId) -> String {
        format!("DH{id:05}")
    }

    /// Сохранить код отслеживания из карточки заказа. `false`, если код тот же.
    pub fn set_tracking_code(&mut self, code: &str) -> bool {
        let code = code.trim();
        if code == self.tracking_code {
            return false;
        }
        self.tracking_code = code.to_string();
        true
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Смена статуса выполнения с записью шага в историю.
    ///
    /// Возвращает `Ok(false)`, если статус не изменился; из терминального
    /// статуса (доставлен/отменён) менять нельзя.
    pub fn change_status(
        &mut self,
        next: OrderStatus,
        note: &str,
        at: String,
    ) -> Result<bool, ValidationError> {
        if next == self.status {
            return Ok(false);
        }
        if self.status.is_terminal() {
            return Err(ValidationError::Locked {
                reason: format!("đơn hàng đã ở trạng thái \"{}\"", self.status.label()),
            });
        }
        self.status = next;
        let note = if note.trim().is_empty() {
            next.label().to_string()
        } else {
            note.trim().to_string()
        };
        self.timeline.push(TimelineStep {
            status: next,
            note,
            at,
        });
        Ok(true)
    }
}

impl Record for Order {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn unique_key(&self) -> Option<(&'static str, &str)> {
        Some(("code", &self.code))
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Đơn hàng"
    }

    fn list_name() -> &'static str {
        "Đơn hàng"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Форма заказа: покупатель, адрес и оплата. Позиции, итоги и статус
/// выполнения формой не меняются (статус меняется через `change_status`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub customer: Customer,
    pub shipping_address: String,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub tracking_code: String,
    /// Время создания для новых заказов
    pub created_at: String,
}

impl RecordForm for OrderForm {
    type Record = Order;

    fn from_record(record: &Order) -> Self {
        Self {
            customer: record.customer.clone(),
            shipping_address: record.shipping_address.clone(),
            payment_status: record.payment_status,
            payment_method: record.payment_method,
            tracking_code: record.tracking_code.clone(),
            created_at: record.created_at.clone(),
        }
    }

    fn create(&self, id: RecordId) -> Order {
        let mut order = Order {
            id,
            code: Order::code_for(id),
            customer: Customer::default(),
            items: Vec::new(),
            totals: OrderTotals::default(),
            payment_status: PaymentStatus::Pending,
            payment_method: PaymentMethod::Cod,
            status: OrderStatus::Pending,
            shipping_address: String::new(),
            timeline: vec![TimelineStep {
                status: OrderStatus::Pending,
                note: "Đơn hàng được tạo".to_string(),
                at: self.created_at.clone(),
            }],
            created_at: self.created_at.clone(),
            tracking_code: String::new(),
        };
        self.apply(&mut order);
        order
    }

    fn apply(&self, record: &mut Order) {
        assign_trimmed(&mut record.customer.name, &self.customer.name);
        assign_trimmed(&mut record.customer.email, &self.customer.email);
        assign_trimmed(&mut record.customer.phone, &self.customer.phone);
        record.shipping_address = self.shipping_address.clone();
        record.payment_status = self.payment_status;
        record.payment_method = self.payment_method;
        assign_trimmed(&mut record.tracking_code, &self.tracking_code);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("customer.name", &self.customer.name)?;
        require("customer.phone", &self.customer.phone)?;
        require("shippingAddress", &self.shipping_address)?;
        if !self.customer.email.trim().is_empty() && !self.customer.email.contains('@') {
            return Err(ValidationError::Malformed {
                field: "customer.email",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub query: String,
    pub status: Facet<OrderStatus>,
    pub payment_status: Facet<PaymentStatus>,
}

impl ListFilter<Order> for OrderFilter {
    fn matches(&self, record: &Order) -> bool {
        matches_query(
            &self.query,
            &[
                &record.code,
                &record.customer.name,
                &record.customer.email,
                &record.customer.phone,
                &record.tracking_code,
            ],
        ) && self.status.matches(&record.status)
            && self.payment_status.matches(&record.payment_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_order::samples::sample_orders;
    use crate::domain::common::RecordStore;
    use crate::shared::list_filter::apply_filter;

    #[test]
    fn test_totals() {
        let lines = vec![
            OrderLine {
                product_name: "A".to_string(),
                quantity: 2,
                unit_price: 100.0,
            },
            OrderLine {
                product_name: "B".to_string(),
                quantity: 1,
                unit_price: 50.0,
            },
        ];
        let totals = OrderTotals::compute(&lines, 30.0, 20.0);
        assert_eq!(totals.subtotal, 250.0);
        assert_eq!(totals.total, 260.0);
        assert_eq!(OrderTotals::compute(&[], 0.0, 10.0).total, 0.0);
    }

    #[test]
    fn test_sample_totals_are_consistent() {
        for order in sample_orders() {
            let recomputed =
                OrderTotals::compute(&order.items, order.totals.shipping, order.totals.discount);
            assert_eq!(order.totals, recomputed, "order {}", order.code);
        }
    }

    #[test]
    fn test_status_change_appends_one_step() {
        let mut order = sample_orders().remove(0);
        assert_eq!(order.status, OrderStatus::Pending);
        let steps = order.timeline.len();

        let changed = order
            .change_status(OrderStatus::Processing, "", "2024-03-16T08:00:00Z".to_string())
            .unwrap();
        assert!(changed);
        assert_eq!(order.timeline.len(), steps + 1);
        let last = order.timeline.last().unwrap();
        assert_eq!(last.status, OrderStatus::Processing);
        assert_eq!(last.note, "Đang xử lý");

        // same status: no step
        assert_eq!(
            order.change_status(OrderStatus::Processing, "x", String::new()),
            Ok(false)
        );
        assert_eq!(order.timeline.len(), steps + 1);
    }

    #[test]
    fn test_terminal_status_is_locked() {
        let mut order = sample_orders()
            .into_iter()
            .find(|o| o.status == OrderStatus::Delivered)
            .unwrap();
        let before = order.clone();
        let result = order.change_status(OrderStatus::Pending, "", String::new());
        assert!(matches!(result, Err(ValidationError::Locked { .. })));
        assert_eq!(order, before);
    }

    #[test]
    fn test_store_status_change_through_modify() {
        let mut store = RecordStore::from_items(sample_orders());
        let changed = store
            .modify(1, |order| {
                order.change_status(OrderStatus::Cancelled, "Khách hủy", "t".to_string())
            })
            .unwrap();
        assert!(changed);
        assert_eq!(store.get(1).map(|o| o.status), Some(OrderStatus::Cancelled));
    }

    #[test]
    fn test_search_by_phone_and_filter_payment() {
        let orders = sample_orders();
        let by_phone = OrderFilter {
            query: "0912".to_string(),
            ..Default::default()
        };
        let found = apply_filter(&orders, &by_phone);
        assert_eq!(found.len(), 1);

        let paid = OrderFilter {
            payment_status: Facet::Only(PaymentStatus::Paid),
            ..Default::default()
        };
        assert!(apply_filter(&orders, &paid)
            .iter()
            .all(|o| o.payment_status == PaymentStatus::Paid));
    }

    #[test]
    fn test_edit_keeps_items_and_status() {
        let mut store = RecordStore::from_items(sample_orders());
        let original = store.get(2).cloned().unwrap();
        let mut form = OrderForm::from_record(&original);
        form.shipping_address = "12 Lý Thường Kiệt, Hà Nội".to_string();
        store.update(2, &form).unwrap();
        let updated = store.get(2).unwrap();
        assert_eq!(updated.items, original.items);
        assert_eq!(updated.status, original.status);
        assert_eq!(updated.timeline, original.timeline);
        assert_eq!(updated.shipping_address, "12 Lý Thường Kiệt, Hà Nội");
    }

    #[test]
    fn test_tracking_code_edit() {
        let mut store = RecordStore::from_items(sample_orders());
        let original = store.get(3).cloned().unwrap();
        assert!(!original.tracking_code.is_empty());

        store
            .update(3, &OrderForm::from_record(&original))
            .unwrap();
        assert_eq!(store.get(3), Some(&original));

        let changed = store
            .modify(3, |order| Ok(order.set_tracking_code(" GHN987654321 ")))
            .unwrap();
        assert!(changed);
        assert_eq!(
            store.get(3).map(|o| o.tracking_code.as_str()),
            Some("GHN987654321")
        );
        assert_eq!(store.get(3).map(|o| &o.timeline), Some(&original.timeline));

        let unchanged = store
            .modify(3, |order| Ok(order.set_tracking_code("GHN987654321")))
            .unwrap();
        assert!(!unchanged);
    }

    #[test]
    fn test_search_by_tracking_code() {
        let orders = sample_orders();
        let code = orders[2].tracking_code.clone();
        let filter = OrderFilter {
            query: code.to_lowercase(),
            ..Default::default()
        };
        let ids: Vec<_> = apply_filter(&orders, &filter).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3]);
    }
}
