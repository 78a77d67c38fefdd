use crate::domain::a004_order::ui::details::OrderDetails;
use crate::domain::a004_order::ui::timeline::OrderTimeline;
use crate::shared::components::badge::status_badge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::table_footer::TableFooter;
use crate::shared::crud::{counter_label, delete_prompt, CrudPage};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, highlight_matches, EmptyState, FacetSelect, SearchInput,
};
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_order::aggregate::{Order, OrderFilter, OrderStatus, PaymentStatus};
use contracts::domain::a004_order::samples::sample_orders;
use contracts::domain::common::RecordId;
use contracts::shared::choice::Choice;
use contracts::shared::list_filter::{Facet, FACET_ALL};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let page = CrudPage::new(sample_orders());
    let query = RwSignal::new(String::new());
    let status = RwSignal::new(FACET_ALL.to_string());
    let payment = RwSignal::new(FACET_ALL.to_string());
    // Заказ, открытый в карточке со статусами
    let viewing = RwSignal::new(None::<RecordId>);

    let visible = Memo::new(move |_| {
        page.visible(&OrderFilter {
            query: query.get(),
            status: Facet::from_choice_key(&status.get()),
            payment_status: Facet::from_choice_key(&payment.get()),
        })
    });

    view! {
        <PageFrame page_id="a004_order--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Đơn hàng"
                subtitle=Signal::derive(move || counter_label(visible.with(Vec::len), page.total()))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                    {icon("plus")}
                    " Tạo đơn hàng"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput value=query placeholder="Mã đơn, tên, email, số điện thoại..." />
                <FacetSelect
                    value=status
                    options=Signal::derive(choice_options::<OrderStatus>)
                    all_label="Tất cả trạng thái"
                />
                <FacetSelect
                    value=payment
                    options=Signal::derive(choice_options::<PaymentStatus>)
                    all_label="Tất cả thanh toán"
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Mã đơn"</th>
                            <th class="table__header-cell">"Khách hàng"</th>
                            <th class="table__header-cell table__header-cell--right">"Số lượng"</th>
                            <th class="table__header-cell table__header-cell--right">"Tổng tiền"</th>
                            <th class="table__header-cell">"Thanh toán"</th>
                            <th class="table__header-cell">"Trạng thái"</th>
                            <th class="table__header-cell">"Ngày tạo"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|order| {
                            let id = order.id;
                            let prompt = delete_prompt::<Order>(&order.code);
                            let code = order.code.clone();
                            let name = order.customer.name.clone();
                            let contact = format!("{} · {}", order.customer.phone, order.customer.email);
                            view! {
                                <tr class="table__row" on:click=move |_| viewing.set(Some(id))>
                                    <td class="table__cell table__cell--mono">
                                        {move || highlight_matches(&code, &query.get())}
                                    </td>
                                    <td class="table__cell">
                                        <div>{move || highlight_matches(&name, &query.get())}</div>
                                        <div class="cell-subtitle">
                                            {move || highlight_matches(&contact, &query.get())}
                                        </div>
                                    </td>
                                    <td class="table__cell table__cell--right">{order.item_count()}</td>
                                    <td class="table__cell table__cell--right">{format_vnd(order.totals.total)}</td>
                                    <td class="table__cell">
                                        {status_badge(order.payment_status)}
                                        <div class="cell-subtitle">{order.payment_method.label()}</div>
                                    </td>
                                    <td class="table__cell">{status_badge(order.status)}</td>
                                    <td class="table__cell">{format_datetime(&order.created_at)}</td>
                                    <RowActions
                                        on_edit=Callback::new(move |_| page.open_edit(id))
                                        on_delete=Callback::new(move |_| page.delete(id, &prompt))
                                    >
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| viewing.set(Some(id))
                                            attr:title="Xem chi tiết"
                                        >
                                            {icon("eye")}
                                        </Button>
                                    </RowActions>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || visible.with(Vec::is_empty)>
                    <EmptyState />
                </Show>
            </div>
            <TableFooter
                visible=Signal::derive(move || visible.with(Vec::len))
                total=Signal::derive(move || page.total())
            />

            <Show when=move || page.show_modal.get()>
                <OrderDetails page=page />
            </Show>
            {move || viewing.get().filter(|id| page.store.with_untracked(|s| s.contains(*id))).map(|id| view! {
                <OrderTimeline page=page id=id on_close=Callback::new(move |_| viewing.set(None)) />
            })}
        </PageFrame>
    }
}
