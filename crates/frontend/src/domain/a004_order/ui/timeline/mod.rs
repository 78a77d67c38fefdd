//! Карточка заказа: позиции, итоги, доставка, история статусов и смена статуса.

use crate::shared::components::badge::status_badge;
use crate::shared::components::form_field::FormField;
use crate::shared::crud::form::parse_choice;
use crate::shared::crud::CrudPage;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal::{FormError, Modal};
use crate::shared::number_format::format_vnd;
use contracts::domain::a004_order::aggregate::{Order, OrderStatus};
use contracts::domain::common::RecordId;
use contracts::shared::choice::Choice;
use contracts::shared::time::now_rfc3339;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, Select};

#[component]
pub fn OrderTimeline(page: CrudPage<Order>, id: RecordId, on_close: Callback<()>) -> impl IntoView {
    let order = Memo::new(move |_| page.get(id));
    let next_status = RwSignal::new(
        order
            .get_untracked()
            .map(|o| o.status.key().to_string())
            .unwrap_or_default(),
    );
    let note = RwSignal::new(String::new());
    let tracking = RwSignal::new(
        order
            .get_untracked()
            .map(|o| o.tracking_code)
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);

    let save_tracking = move |_| {
        let code = tracking.get_untracked();
        let mut failure = None;
        page.store.update(|store| {
            match store.modify(id, |o| Ok(o.set_tracking_code(&code))) {
                Ok(true) => log::info!("order: #{} tracking -> {}", id, code.trim()),
                Ok(false) => {}
                Err(e) => failure = Some(e.to_string()),
            }
        });
        error.set(failure);
    };

    let apply_status = move |_| {
        let next = match parse_choice::<OrderStatus>("status", &next_status.get_untracked()) {
            Ok(next) => next,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let text = note.get_untracked();
        let mut failure = None;
        page.store.update(|store| {
            match store.modify(id, |o| o.change_status(next, &text, now_rfc3339())) {
                Ok(true) => log::info!("order: #{} status -> {}", id, next.key()),
                Ok(false) => {}
                Err(e) => failure = Some(e.to_string()),
            }
        });
        if failure.is_none() {
            note.set(String::new());
        }
        error.set(failure);
    };

    let title = Signal::derive(move || {
        order
            .get()
            .map(|o| format!("Đơn hàng {}", o.code))
            .unwrap_or_default()
    });

    view! {
        <Modal title=title on_close=on_close>
            {move || order.get().map(|o| {
                let locked = o.status.is_terminal();
                view! {
                    <div class="order-card">
                        <div class="order-card__header">
                            <div>
                                <div class="order-card__customer">{o.customer.name.clone()}</div>
                                <div class="cell-subtitle">
                                    {o.customer.phone.clone()}" · "{o.customer.email.clone()}
                                </div>
                                <div class="cell-subtitle">{o.shipping_address.clone()}</div>
                            </div>
                            <div class="order-card__badges">
                                {status_badge(o.status)}
                                {status_badge(o.payment_status)}
                                <span class="cell-subtitle">{o.payment_method.label()}</span>
                            </div>
                        </div>

                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Sản phẩm"</th>
                                    <th class="table__header-cell table__header-cell--right">"SL"</th>
                                    <th class="table__header-cell table__header-cell--right">"Đơn giá"</th>
                                    <th class="table__header-cell table__header-cell--right">"Thành tiền"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {o.items.iter().map(|line| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{line.product_name.clone()}</td>
                                        <td class="table__cell table__cell--right">{line.quantity}</td>
                                        <td class="table__cell table__cell--right">{format_vnd(line.unit_price)}</td>
                                        <td class="table__cell table__cell--right">{format_vnd(line.line_total())}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>

                        <div class="order-card__totals">
                            <div><span>"Tạm tính"</span><span>{format_vnd(o.totals.subtotal)}</span></div>
                            <div><span>"Phí vận chuyển"</span><span>{format_vnd(o.totals.shipping)}</span></div>
                            <div><span>"Giảm giá"</span><span>{format!("-{}", format_vnd(o.totals.discount))}</span></div>
                            <div class="order-card__total"><span>"Tổng cộng"</span><span>{format_vnd(o.totals.total)}</span></div>
                        </div>

                        <h4 class="form__section">"Thông tin vận chuyển"</h4>
                        <div class="form__row form__row--inline">
                            <FormField label="Mã vận đơn">
                                <Input value=tracking placeholder="VN123456789" />
                            </FormField>
                            <Button appearance=ButtonAppearance::Secondary on_click=save_tracking>
                                {icon("save")}
                                " Lưu mã"
                            </Button>
                        </div>

                        <h4 class="form__section">"Lịch sử đơn hàng"</h4>
                        <ol class="timeline">
                            {o.timeline.iter().map(|step| view! {
                                <li class="timeline__step">
                                    <div class="timeline__marker">{icon("clock")}</div>
                                    <div class="timeline__body">
                                        {status_badge(step.status)}
                                        <span class="timeline__note">{step.note.clone()}</span>
                                        <span class="timeline__time">{format_datetime(&step.at)}</span>
                                    </div>
                                </li>
                            }).collect_view()}
                        </ol>

                        {if locked {
                            view! {
                                <div class="alert alert--info">
                                    {icon("alert")}
                                    <span>"Đơn hàng đã kết thúc, không thể đổi trạng thái."</span>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <div class="form__row">
                                    <FormField label="Trạng thái mới">
                                        <Select value=next_status>
                                            {OrderStatus::ALL.iter().map(|s| view! {
                                                <option value=s.key()>{s.label()}</option>
                                            }).collect_view()}
                                        </Select>
                                    </FormField>
                                    <FormField label="Ghi chú">
                                        <Input value=note placeholder="Không bắt buộc" />
                                    </FormField>
                                </div>
                                <Button appearance=ButtonAppearance::Primary on_click=apply_status>
                                    {icon("refresh")}
                                    " Cập nhật trạng thái"
                                </Button>
                            }.into_any()
                        }}
                    </div>
                }
            })}
            <FormError error=error />
        </Modal>
    }
}
