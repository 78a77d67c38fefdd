mod model;
pub mod state;

use self::state::ProductListState;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::components::badge::status_badge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::select_cell::{SelectAllCell, SelectCell};
use crate::shared::components::table_footer::TableFooter;
use crate::shared::config::AppConfig;
use crate::shared::crud::{counter_label, delete_prompt, CrudPage};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, highlight_matches, text_options, EmptyState, FacetSelect, SearchInput,
};
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::aggregate::{Product, ProductStatus};
use contracts::domain::a001_product::samples::sample_products;
use contracts::domain::common::RecordId;
use contracts::shared::list_filter::distinct_values;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let remote = config.remote;
    let is_remote = remote.is_configured();

    let page = CrudPage::new(if is_remote {
        Vec::new()
    } else {
        sample_products()
    });
    let state = ProductListState::new();

    // Один запрос при монтировании; без повторов и кэша
    if is_remote {
        state.loading.set(true);
        spawn_local(async move {
            match model::fetch_products(&remote).await {
                Ok(rows) => {
                    log::info!("products: loaded {} rows from remote", rows.len());
                    page.store.try_update(|store| store.replace_all(rows));
                    state.load_error.try_set(None);
                }
                Err(e) => {
                    log::error!("products: remote load failed: {}", e);
                    state.load_error.try_set(Some(e.to_string()));
                }
            }
            state.loading.try_set(false);
        });
    }

    let visible = Memo::new(move |_| page.visible(&state.filter()));
    let visible_ids = Signal::derive(move || {
        visible.with(|rows| rows.iter().map(|p| p.id).collect::<Vec<RecordId>>())
    });
    let categories = Signal::derive(move || {
        page.store
            .with(|store| distinct_values(store.items(), |p: &Product| p.category.as_str()))
    });
    let category_options = Signal::derive(move || text_options(categories.get()));
    let status_options = Signal::derive(choice_options::<ProductStatus>);
    let selected_count = move || page.selected.with(|s| s.len());

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Sản phẩm"
                subtitle=Signal::derive(move || counter_label(visible.with(Vec::len), page.total()))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| page.delete_selected()
                    disabled=Signal::derive(move || selected_count() == 0)
                >
                    {icon("delete")}
                    {move || format!(" Xóa ({})", selected_count())}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                    {icon("plus")}
                    " Thêm sản phẩm"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput value=state.query placeholder="Tìm theo tên sản phẩm..." />
                <FacetSelect value=state.category options=category_options all_label="Tất cả danh mục" />
                <FacetSelect value=state.status options=status_options all_label="Tất cả trạng thái" />
            </div>

            {move || state.load_error.get().map(|e| view! {
                <div class="alert alert--error">{icon("alert")}<span>{e}</span></div>
            })}
            {move || page.error.get().map(|e| view! {
                <div class="alert alert--error">{icon("alert")}<span>{e}</span></div>
            })}

            <Show
                when=move || !state.loading.get()
                fallback=|| view! {
                    <div class="page__loading">
                        <Spinner />
                        <span>"Đang tải dữ liệu..."</span>
                    </div>
                }
            >
                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <SelectAllCell page=page visible_ids=visible_ids />
                                <th class="table__header-cell">"Sản phẩm"</th>
                                <th class="table__header-cell">"Danh mục"</th>
                                <th class="table__header-cell table__header-cell--right">"Giá"</th>
                                <th class="table__header-cell table__header-cell--right">"Tồn kho"</th>
                                <th class="table__header-cell">"Trạng thái"</th>
                                <th class="table__header-cell table__header-cell--right">"Đánh giá"</th>
                                <th class="table__header-cell table__header-cell--right">"Đã bán"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || visible.get().into_iter().map(|product| {
                                let id = product.id;
                                let prompt = delete_prompt::<Product>(&product.name);
                                let low_stock = product.is_low_stock();
                                let name = product.name.clone();
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || page.is_selected(id)
                                        on:click=move |_| page.open_edit(id)
                                    >
                                        <SelectCell page=page id=id />
                                        <td class="table__cell">
                                            {move || highlight_matches(&name, &state.query.get())}
                                        </td>
                                        <td class="table__cell">{product.category}</td>
                                        <td class="table__cell table__cell--right">{format_vnd(product.price)}</td>
                                        <td class="table__cell table__cell--right" class:text--warning=low_stock>
                                            {product.stock}
                                        </td>
                                        <td class="table__cell">{status_badge(product.status)}</td>
                                        <td class="table__cell table__cell--right">
                                            {icon("star")}
                                            {format!(" {:.1}", product.rating)}
                                        </td>
                                        <td class="table__cell table__cell--right">{product.sales}</td>
                                        <RowActions
                                            on_edit=Callback::new(move |_| page.open_edit(id))
                                            on_delete=Callback::new(move |_| page.delete(id, &prompt))
                                        />
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
            </Show>

            <Show when=move || page.show_modal.get()>
                <ProductDetails page=page categories=categories />
            </Show>
        </PageFrame>
    }
}
