use crate::domain::a005_menu_item::ui::details::MenuItemDetails;
use crate::shared::components::badge::kind_badge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::table_footer::TableFooter;
use crate::shared::crud::{counter_label, delete_prompt, CrudPage};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, highlight_matches, EmptyState, FacetSelect, SearchInput,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_menu_item::aggregate::{MenuItem, MenuItemFilter, MenuItemKind};
use contracts::domain::a005_menu_item::samples::sample_menu_items;
use contracts::domain::common::{Arena, MoveDirection, RecordId};
use contracts::shared::list_filter::{Facet, FACET_ALL};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Текст подтверждения с числом вложенных пунктов, которые удалятся вместе с пунктом
fn cascade_prompt(page: CrudPage<MenuItem>, id: RecordId, title: &str) -> String {
    let children = page
        .store
        .with_untracked(|store| Arena::build(store.items()).descendants(id).len());
    let base = delete_prompt::<MenuItem>(title);
    if children == 0 {
        base
    } else {
        format!("{} ({} mục con cũng sẽ bị xóa)", base, children)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MenuList() -> impl IntoView {
    let page = CrudPage::new(sample_menu_items());
    let query = RwSignal::new(String::new());
    let kind = RwSignal::new(FACET_ALL.to_string());

    let rows = Memo::new(move |_| {
        page.visible_tree(&MenuItemFilter {
            query: query.get(),
            kind: Facet::from_choice_key(&kind.get()),
        })
    });

    let move_item = move |id: RecordId, direction: MoveDirection| {
        page.move_within(id, direction, |item: &MenuItem| item.parent_id);
    };

    view! {
        <PageFrame page_id="a005_menu_item--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Menu"
                subtitle=Signal::derive(move || counter_label(rows.with(Vec::len), page.total()))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                    {icon("plus")}
                    " Thêm mục menu"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput value=query placeholder="Tìm theo tiêu đề, đường dẫn..." />
                <FacetSelect
                    value=kind
                    options=Signal::derive(choice_options::<MenuItemKind>)
                    all_label="Tất cả loại"
                />
            </div>

            <div class="table-container">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Tiêu đề"</th>
                            <th class="table__header-cell">"Đường dẫn"</th>
                            <th class="table__header-cell">"Loại"</th>
                            <th class="table__header-cell table__header-cell--right">"Thứ tự"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|line| {
                            let item = line.record;
                            let id = item.id;
                            let title = item.title.clone();
                            let url = item.url.clone();
                            let indent = format!("padding-left: {}px;", line.depth * 24);
                            let title_for_prompt = item.title.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| page.open_edit(id)>
                                    <td class="table__cell">
                                        <div class="tree-cell" style=indent>
                                            {if line.depth > 0 {
                                                view! { <span class="tree-cell__branch">"└"</span> }.into_any()
                                            } else {
                                                icon("menu")
                                            }}
                                            <span>{move || highlight_matches(&title, &query.get())}</span>
                                        </div>
                                    </td>
                                    <td class="table__cell table__cell--mono">
                                        {icon("link")}
                                        {move || highlight_matches(&url, &query.get())}
                                    </td>
                                    <td class="table__cell">{kind_badge(item.kind)}</td>
                                    <td class="table__cell table__cell--right">{item.order}</td>
                                    <RowActions
                                        on_edit=Callback::new(move |_| page.open_edit(id))
                                        on_delete=Callback::new(move |_| {
                                            let prompt = cascade_prompt(page, id, &title_for_prompt);
                                            page.delete_subtree(id, &prompt);
                                        })
                                    >
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| move_item(id, MoveDirection::Up)
                                            attr:title="Lên trên"
                                        >
                                            {icon("arrow-up")}
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| move_item(id, MoveDirection::Down)
                                            attr:title="Xuống dưới"
                                        >
                                            {icon("arrow-down")}
                                        </Button>
                                    </RowActions>
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
                <MenuItemDetails page=page />
            </Show>
        </PageFrame>
    }
}
