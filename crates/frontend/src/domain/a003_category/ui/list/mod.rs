use crate::domain::a003_category::ui::details::CategoryDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::table_footer::TableFooter;
use crate::shared::crud::{counter_label, delete_prompt, CrudPage};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, EmptyState, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_category::aggregate::{Category, CategoryFilter, CategoryVariant};
use contracts::domain::a003_category::samples::sample_categories;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

fn page_id(variant: CategoryVariant) -> &'static str {
    match variant {
        CategoryVariant::Product => "a003_category_product--list",
        CategoryVariant::Post => "a003_category_post--list",
    }
}

/// Дерево категорий одного вида (товары или посты)
#[component]
#[allow(non_snake_case)]
pub fn CategoryList(variant: CategoryVariant) -> impl IntoView {
    let page = CrudPage::new(sample_categories(variant));
    let query = RwSignal::new(String::new());

    let rows = Memo::new(move |_| {
        page.visible_tree(&CategoryFilter {
            query: query.get(),
        })
    });

    view! {
        <PageFrame page_id=page_id(variant) category=PAGE_CAT_LIST>
            <PageHeader
                title=variant.list_title()
                subtitle=Signal::derive(move || counter_label(rows.with(Vec::len), page.total()))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                    {icon("plus")}
                    " Thêm danh mục"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput value=query placeholder="Tìm theo tên, slug, mô tả..." />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Tên danh mục"</th>
                            <th class="table__header-cell">"Slug"</th>
                            <th class="table__header-cell">"Mô tả"</th>
                            <th class="table__header-cell table__header-cell--right">{variant.count_label()}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|line| {
                            let category = line.record;
                            let id = category.id;
                            let prompt = delete_prompt::<Category>(&category.name);
                            let name = category.name.clone();
                            let slug = category.slug.clone();
                            let indent = format!("padding-left: {}px;", line.depth * 24);
                            view! {
                                <tr class="table__row" on:click=move |_| page.open_edit(id)>
                                    <td class="table__cell">
                                        <div class="tree-cell" style=indent>
                                            {if line.depth > 0 {
                                                view! { <span class="tree-cell__branch">"└"</span> }.into_any()
                                            } else if line.has_children {
                                                icon("chevron-down")
                                            } else {
                                                icon("folder")
                                            }}
                                            <span>{move || highlight_matches(&name, &query.get())}</span>
                                        </div>
                                    </td>
                                    <td class="table__cell table__cell--mono">
                                        {move || highlight_matches(&slug, &query.get())}
                                    </td>
                                    <td class="table__cell">{category.description}</td>
                                    <td class="table__cell table__cell--right">{category.count}</td>
                                    <RowActions
                                        on_edit=Callback::new(move |_| page.open_edit(id))
                                        on_delete=Callback::new(move |_| page.delete(id, &prompt))
                                    />
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || rows.with(Vec::is_empty)>
                    <EmptyState />
                </Show>
            </div>
            <TableFooter
                visible=Signal::derive(move || rows.with(Vec::len))
                total=Signal::derive(move || page.total())
            />

            <Show when=move || page.show_modal.get()>
                <CategoryDetails page=page />
            </Show>
        </PageFrame>
    }
}
