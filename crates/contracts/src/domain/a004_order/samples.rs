use super::aggregate::{
    Customer, Order, OrderLine, OrderStatus, OrderTotals, PaymentMethod, PaymentStatus,
    TimelineStep,
};

fn line(product_name: &str, quantity: u32, unit_price: f64) -> OrderLine {
    OrderLine {
        product_name: product_name.to_string(),
        quantity,
        unit_price,
    }
}

fn step(status: OrderStatus, note: &str, at: &str) -> TimelineStep {
    TimelineStep {
        status,
        note: note.to_string(),
        at: at.to_string(),
    }
}

struct Draft {
    id: i64,
    customer: (&'static str, &'static str, &'static str),
    address: &'static str,
    items: Vec<OrderLine>,
    shipping: f64,
    discount: f64,
    payment: (PaymentStatus, PaymentMethod),
    timeline: Vec<TimelineStep>,
}

impl Draft {
    fn build(self) -> Order {
        let (name, email, phone) = self.customer;
        let status = self
            .timeline
            .last()
            .map_or(OrderStatus::Pending, |step| step.status);
        let created_at = self
            .timeline
            .first()
            .map(|step| step.at.clone())
            .unwrap_or_default();
        // Код отслеживания есть только у переданных перевозчику
        let tracking_code = if self.timeline.iter().any(|step| step.status == OrderStatus::Shipped) {
            format!("VN{:09}", 123_456_000 + self.id)
        } else {
            String::new()
        };
        Order {
            id: self.id,
            code: Order::code_for(self.id),
            customer: Customer {
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
            },
            totals: OrderTotals::compute(&self.items, self.shipping, self.discount),
            items: self.items,
            payment_status: self.payment.0,
            payment_method: self.payment.1,
            status,
            shipping_address: self.address.to_string(),
            timeline: self.timeline,
            created_at,
            tracking_code,
        }
    }
}

/// Демонстрационные заказы в разных статусах
pub fn sample_orders() -> Vec<Order> {
    use OrderStatus::*;
    vec![
        Draft {
            id: 1,
            customer: ("Nguyễn Văn An", "an.nguyen@gmail.com", "0901234567"),
            address: "123 Nguyễn Huệ, Quận 1, TP. Hồ Chí Minh",
            items: vec![line("iPhone 15 Pro Max", 1, 29_990_000.0)],
            shipping: 0.0,
            discount: 0.0,
            payment: (PaymentStatus::Pending, PaymentMethod::Cod),
            timeline: vec![step(Pending, "Đơn hàng được tạo", "2024-03-15T10:30:00Z")],
        }
        .build(),
        Draft {
            id: 2,
            customer: ("Trần Thị Bình", "binh.tran@yahoo.com", "0912345678"),
            address: "45 Trần Phú, Ba Đình, Hà Nội",
            items: vec![
                line("AirPods Pro 2", 2, 5_990_000.0),
                line("Sạc nhanh Anker 65W", 1, 890_000.0),
            ],
            shipping: 30_000.0,
            discount: 500_000.0,
            payment: (PaymentStatus::Paid, PaymentMethod::BankTransfer),
            timeline: vec![
                step(Pending, "Đơn hàng được tạo", "2024-03-14T09:00:00Z"),
                step(Processing, "Đã xác nhận thanh toán", "2024-03-14T11:20:00Z"),
            ],
        }
        .build(),
        Draft {
            id: 3,
            customer: ("Lê Hoàng Cường", "cuong.le@outlook.com", "0987654321"),
            address: "78 Lê Lợi, Hải Châu, Đà Nẵng",
            items: vec![line("MacBook Air M3", 1, 27_490_000.0)],
            shipping: 0.0,
            discount: 1_000_000.0,
            payment: (PaymentStatus::Paid, PaymentMethod::Card),
            timeline: vec![
                step(Pending, "Đơn hàng được tạo", "2024-03-12T14:10:00Z"),
                step(Processing, "Đang đóng gói", "2024-03-12T16:00:00Z"),
                step(Shipped, "Đã bàn giao cho đơn vị vận chuyển", "2024-03-13T08:30:00Z"),
            ],
        }
        .build(),
        Draft {
            id: 4,
            customer: ("Phạm Minh Dũng", "dung.pham@gmail.com", "0933445566"),
            address: "12 Hùng Vương, Ninh Kiều, Cần Thơ",
            items: vec![
                line("Apple Watch Series 9", 1, 9_990_000.0),
                line("Sạc nhanh Anker 65W", 2, 890_000.0),
            ],
            shipping: 30_000.0,
            discount: 0.0,
            payment: (PaymentStatus::Paid, PaymentMethod::EWallet),
            timeline: vec![
                step(Pending, "Đơn hàng được tạo", "2024-03-08T19:45:00Z"),
                step(Processing, "Đang đóng gói", "2024-03-09T08:00:00Z"),
                step(Shipped, "Đang giao hàng", "2024-03-09T15:00:00Z"),
                step(Delivered, "Giao hàng thành công", "2024-03-11T10:15:00Z"),
            ],
        }
        .build(),
        Draft {
            id: 5,
            customer: ("Hoàng Thu Em", "em.hoang@gmail.com", "0977889900"),
            address: "56 Bạch Đằng, Hồng Bàng, Hải Phòng",
            items: vec![line("Xiaomi Redmi Note 13", 1, 5_490_000.0)],
            shipping: 30_000.0,
            discount: 0.0,
            payment: (PaymentStatus::Refunded, PaymentMethod::BankTransfer),
            timeline: vec![
                step(Pending, "Đơn hàng được tạo", "2024-03-05T07:20:00Z"),
                step(Cancelled, "Khách hàng yêu cầu hủy", "2024-03-05T12:00:00Z"),
            ],
        }
        .build(),
    ]
}
