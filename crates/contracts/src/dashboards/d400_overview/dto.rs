use crate::domain::a001_product::aggregate::{Product, ProductStatus};
use crate::domain::a002_post::aggregate::{Post, PostStatus};
use crate::domain::a004_order::aggregate::{Order, OrderStatus, PaymentStatus};
use crate::domain::common::RecordId;
use serde::{Deserialize, Serialize};

/// Сколько строк выводить в блоках "топ товаров" и "последние заказы"
pub const TOP_ROWS: usize = 5;

/// Сводка для стартовой страницы панели
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewSummary {
    pub product_count: usize,
    pub active_products: usize,
    /// Товары в продаже с остатком ниже порога
    pub low_stock: usize,
    pub order_count: usize,
    /// Заказы, ожидающие обработки
    pub pending_orders: usize,
    /// Выручка по оплаченным заказам
    pub paid_revenue: f64,
    pub published_posts: usize,
    pub draft_posts: usize,
    pub top_products: Vec<TopProductRow>,
    pub recent_orders: Vec<RecentOrderRow>,
}

/// Строка блока "топ товаров"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProductRow {
    pub id: RecordId,
    pub name: String,
    pub sales: u32,
    pub revenue: f64,
}

/// Строка блока "последние заказы"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrderRow {
    pub id: RecordId,
    pub code: String,
    pub customer_name: String,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: String,
}

impl OverviewSummary {
    pub fn compute(products: &[Product], orders: &[Order], posts: &[Post]) -> Self {
        let mut top: Vec<&Product> = products.iter().collect();
        top.sort_by(|a, b| b.sales.cmp(&a.sales));

        // RFC 3339 в UTC сравнивается как строка
        let mut recent: Vec<&Order> = orders.iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Self {
            product_count: products.len(),
            active_products: products
                .iter()
                .filter(|p| p.status == ProductStatus::Active)
                .count(),
            low_stock: products
                .iter()
                .filter(|p| p.status == ProductStatus::Active && p.is_low_stock())
                .count(),
            order_count: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            paid_revenue: orders
                .iter()
                .filter(|o| o.payment_status == PaymentStatus::Paid)
                .map(|o| o.totals.total)
                .sum(),
            published_posts: posts
                .iter()
                .filter(|p| p.status == PostStatus::Published)
                .count(),
            draft_posts: posts
                .iter()
                .filter(|p| p.status == PostStatus::Draft)
                .count(),
            top_products: top
                .into_iter()
                .take(TOP_ROWS)
                .map(|p| TopProductRow {
                    id: p.id,
                    name: p.name.clone(),
                    sales: p.sales,
                    revenue: p.revenue(),
                })
                .collect(),
            recent_orders: recent
                .into_iter()
                .take(TOP_ROWS)
                .map(|o| RecentOrderRow {
                    id: o.id,
                    code: o.code.clone(),
                    customer_name: o.customer.name.clone(),
                    total: o.totals.total,
                    status: o.status,
                    created_at: o.created_at.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::samples::sample_products;
    use crate::domain::a002_post::samples::sample_posts;
    use crate::domain::a004_order::samples::sample_orders;

    #[test]
    fn test_empty_summary() {
        assert_eq!(OverviewSummary::compute(&[], &[], &[]), OverviewSummary::default());
    }

    #[test]
    fn test_summary_from_samples() {
        let products = sample_products();
        let orders = sample_orders();
        let summary = OverviewSummary::compute(&products, &orders, &sample_posts());

        assert_eq!(summary.product_count, products.len());
        assert_eq!(summary.order_count, orders.len());
        assert_eq!(summary.pending_orders, 1);
        // iPad (7) и зарядка (4) ниже порога
        assert_eq!(summary.low_stock, 2);

        let expected: f64 = orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Paid)
            .map(|o| o.totals.total)
            .sum();
        assert_eq!(summary.paid_revenue, expected);

        assert_eq!(summary.top_products.len(), TOP_ROWS);
        assert_eq!(summary.top_products[0].name, "Sạc nhanh Anker 65W");
        assert!(summary
            .top_products
            .windows(2)
            .all(|w| w[0].sales >= w[1].sales));

        assert_eq!(summary.recent_orders[0].code, "DH00001");
    }
}
