use crate::domain::a006_admin_user::ui::details::AdminUserDetails;
use crate::shared::components::badge::{kind_badge, status_badge};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::table_footer::TableFooter;
use crate::shared::crud::{counter_label, delete_prompt, CrudPage};
use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, highlight_matches, EmptyState, FacetSelect, SearchInput,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_admin_user::aggregate::{
    AdminRole, AdminUser, AdminUserFilter, UserStatus,
};
use contracts::domain::a006_admin_user::samples::sample_admin_users;
use contracts::domain::common::RecordId;
use contracts::shared::list_filter::{Facet, FACET_ALL};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
#[allow(non_snake_case)]
pub fn AdminUserList() -> impl IntoView {
    let page = CrudPage::new(sample_admin_users());
    let query = RwSignal::new(String::new());
    let role = RwSignal::new(FACET_ALL.to_string());
    let status = RwSignal::new(FACET_ALL.to_string());

    let visible = Memo::new(move |_| {
        page.visible(&AdminUserFilter {
            query: query.get(),
            role: Facet::from_choice_key(&role.get()),
            status: Facet::from_choice_key(&status.get()),
        })
    });

    let toggle_status = move |id: RecordId| {
        page.quick(id, |user| {
            user.status = user.status.toggled();
            log::info!("admin_user: #{} status -> {:?}", id, user.status);
            Ok(())
        });
    };

    view! {
        <PageFrame page_id="a006_admin_user--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Người dùng quản trị"
                subtitle=Signal::derive(move || counter_label(visible.with(Vec::len), page.total()))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                    {icon("plus")}
                    " Thêm người dùng"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput value=query placeholder="Tìm theo tên, email..." />
                <FacetSelect
                    value=role
                    options=Signal::derive(choice_options::<AdminRole>)
                    all_label="Tất cả vai trò"
                />
                <FacetSelect
                    value=status
                    options=Signal::derive(choice_options::<UserStatus>)
                    all_label="Tất cả trạng thái"
                />
            </div>

            {move || page.error.get().map(|e| view! {
                <div class="alert alert--error">{icon("alert")}<span>{e}</span></div>
            })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Người dùng"</th>
                            <th class="table__header-cell">"Vai trò"</th>
                            <th class="table__header-cell">"Trạng thái"</th>
                            <th class="table__header-cell">"Ngày tạo"</th>
                            <th class="table__header-cell">"Đăng nhập gần nhất"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|user| {
                            let id = user.id;
                            let prompt = delete_prompt::<AdminUser>(&user.name);
                            let name = user.name.clone();
                            let email = user.email.clone();
                            let active = user.status == UserStatus::Active;
                            view! {
                                <tr class="table__row" on:click=move |_| page.open_edit(id)>
                                    <td class="table__cell">
                                        <div class="user-cell">
                                            <span class="user-cell__avatar">{user.initials()}</span>
                                            <div>
                                                <div>{move || highlight_matches(&name, &query.get())}</div>
                                                <div class="cell-subtitle">
                                                    {move || highlight_matches(&email, &query.get())}
                                                </div>
                                            </div>
                                        </div>
                                    </td>
                                    <td class="table__cell">{kind_badge(user.role)}</td>
                                    <td class="table__cell">{status_badge(user.status)}</td>
                                    <td class="table__cell">{format_date(&user.created_at)}</td>
                                    <td class="table__cell">{format_optional_date(user.last_login.as_deref())}</td>
                                    <RowActions
                                        on_edit=Callback::new(move |_| page.open_edit(id))
                                        on_delete=Callback::new(move |_| page.delete(id, &prompt))
                                    >
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| toggle_status(id)
                                            attr:title=if active { "Vô hiệu hóa" } else { "Kích hoạt" }
                                        >
                                            {icon(if active { "eye-off" } else { "eye" })}
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
                <AdminUserDetails page=page />
            </Show>
        </PageFrame>
    }
}
