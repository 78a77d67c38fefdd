use crate::shared::components::badge::status_badge;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::EmptyState;
use crate::shared::number_format::{format_thousands, format_vnd, format_vnd_short};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::dto::OverviewSummary;
use contracts::domain::a001_product::samples::sample_products;
use contracts::domain::a002_post::samples::sample_posts;
use contracts::domain::a004_order::samples::sample_orders;
use leptos::prelude::*;

/// Обзорная панель: ключевые показатели, топ товаров и последние заказы
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let summary = OverviewSummary::compute(&sample_products(), &sample_orders(), &sample_posts());
    log::debug!(
        "overview: {} products, {} orders, revenue {}",
        summary.product_count,
        summary.order_count,
        summary.paid_revenue
    );

    let low_stock_tone = if summary.low_stock > 0 {
        StatTone::Warning
    } else {
        StatTone::Good
    };
    let pending_tone = if summary.pending_orders > 0 {
        StatTone::Warning
    } else {
        StatTone::Neutral
    };

    let top_products = summary.top_products.clone();
    let recent_orders = summary.recent_orders.clone();

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Tổng quan" subtitle="Số liệu cửa hàng hôm nay".to_string() />

            <div class="stat-grid">
                <StatCard
                    label="Doanh thu"
                    icon_name="dollar-sign"
                    value=format_vnd_short(summary.paid_revenue)
                    tone=StatTone::Good
                    subtitle=Some("Đơn đã thanh toán".to_string())
                />
                <StatCard
                    label="Đơn hàng"
                    icon_name="shopping-cart"
                    value=format_thousands(summary.order_count as i64)
                    tone=pending_tone
                    subtitle=Some(format!("{} chờ xử lý", summary.pending_orders))
                />
                <StatCard
                    label="Sản phẩm"
                    icon_name="package"
                    value=format_thousands(summary.product_count as i64)
                    tone=low_stock_tone
                    subtitle=Some(format!(
                        "{} đang bán, {} sắp hết hàng",
                        summary.active_products,
                        summary.low_stock,
                    ))
                />
                <StatCard
                    label="Bài viết"
                    icon_name="file-text"
                    value=format_thousands(summary.published_posts as i64)
                    subtitle=Some(format!("{} bản nháp", summary.draft_posts))
                />
            </div>

            <div class="dashboard-grid">
                <CardAnimated title="Sản phẩm bán chạy" delay_ms=80>
                    {if top_products.is_empty() {
                        view! { <EmptyState message="Chưa có dữ liệu bán hàng" /> }.into_any()
                    } else {
                        view! {
                            <table class="table__data">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"#"</th>
                                        <th class="table__header-cell">"Sản phẩm"</th>
                                        <th class="table__header-cell table__header-cell--right">"Đã bán"</th>
                                        <th class="table__header-cell table__header-cell--right">"Doanh thu"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {top_products.into_iter().enumerate().map(|(rank, row)| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{rank + 1}</td>
                                            <td class="table__cell">{row.name}</td>
                                            <td class="table__cell table__cell--right">
                                                {format_thousands(row.sales as i64)}
                                            </td>
                                            <td class="table__cell table__cell--right">
                                                {format_vnd(row.revenue)}
                                            </td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }}
                </CardAnimated>

                <CardAnimated title="Đơn hàng gần đây" delay_ms=160>
                    {if recent_orders.is_empty() {
                        view! { <EmptyState message="Chưa có đơn hàng" /> }.into_any()
                    } else {
                        view! {
                            <table class="table__data">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Mã đơn"</th>
                                        <th class="table__header-cell">"Khách hàng"</th>
                                        <th class="table__header-cell">"Trạng thái"</th>
                                        <th class="table__header-cell table__header-cell--right">"Tổng tiền"</th>
                                        <th class="table__header-cell">"Ngày tạo"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {recent_orders.into_iter().map(|row| view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--mono">{row.code}</td>
                                            <td class="table__cell">{row.customer_name}</td>
                                            <td class="table__cell">{status_badge(row.status)}</td>
                                            <td class="table__cell table__cell--right">{format_vnd(row.total)}</td>
                                            <td class="table__cell">{format_datetime(&row.created_at)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }}
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
