pub mod state;

use self::state::PostListState;
use crate::domain::a002_post::ui::details::PostDetails;
use crate::shared::components::badge::status_badge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::select_cell::{SelectAllCell, SelectCell};
use crate::shared::components::table_footer::TableFooter;
use crate::shared::crud::{counter_label, delete_prompt, CrudPage};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, highlight_matches, text_options, EmptyState, FacetSelect, SearchInput,
};
use crate::shared::number_format::format_thousands;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_post::aggregate::{Post, PostStatus};
use contracts::domain::a002_post::samples::sample_posts;
use contracts::domain::common::RecordId;
use contracts::shared::list_filter::distinct_values;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
#[allow(non_snake_case)]
pub fn PostList() -> impl IntoView {
    let page = CrudPage::new(sample_posts());
    let state = PostListState::new();

    let visible = Memo::new(move |_| page.visible(&state.filter()));
    let visible_ids = Signal::derive(move || {
        visible.with(|rows| rows.iter().map(|p| p.id).collect::<Vec<RecordId>>())
    });
    let categories = Signal::derive(move || {
        page.store
            .with(|store| distinct_values(store.items(), |p: &Post| p.category.as_str()))
    });
    let category_options = Signal::derive(move || text_options(categories.get()));
    let status_options = Signal::derive(choice_options::<PostStatus>);
    let selected_count = move || page.selected.with(|s| s.len());

    let toggle_featured = move |id: RecordId| {
        page.quick(id, |post| {
            post.featured = !post.featured;
            log::info!("post: #{} featured={}", id, post.featured);
            Ok(())
        });
    };

    view! {
        <PageFrame page_id="a002_post--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Bài viết"
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
                    " Viết bài mới"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput value=state.query placeholder="Tìm theo tiêu đề, tóm tắt, tác giả..." />
                <FacetSelect value=state.category options=category_options all_label="Tất cả danh mục" />
                <FacetSelect value=state.status options=status_options all_label="Tất cả trạng thái" />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SelectAllCell page=page visible_ids=visible_ids />
                            <th class="table__header-cell">"Tiêu đề"</th>
                            <th class="table__header-cell">"Danh mục"</th>
                            <th class="table__header-cell">"Tác giả"</th>
                            <th class="table__header-cell">"Trạng thái"</th>
                            <th class="table__header-cell">"Ngày đăng"</th>
                            <th class="table__header-cell table__header-cell--right">"Lượt xem"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|post| {
                            let id = post.id;
                            let prompt = delete_prompt::<Post>(&post.title);
                            let title = post.title.clone();
                            let excerpt = post.excerpt.clone();
                            let featured = post.featured;
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=move || page.is_selected(id)
                                    on:click=move |_| page.open_edit(id)
                                >
                                    <SelectCell page=page id=id />
                                    <td class="table__cell">
                                        <div class="cell-title">
                                            {featured.then(|| view! {
                                                <span class="cell-title__flag" title="Nổi bật">{icon("star")}</span>
                                            })}
                                            <span>{move || highlight_matches(&title, &state.query.get())}</span>
                                        </div>
                                        <div class="cell-subtitle">
                                            {move || highlight_matches(&excerpt, &state.query.get())}
                                        </div>
                                    </td>
                                    <td class="table__cell">{post.category}</td>
                                    <td class="table__cell">{post.author}</td>
                                    <td class="table__cell">{status_badge(post.status)}</td>
                                    <td class="table__cell">{format_date(&post.publish_date)}</td>
                                    <td class="table__cell table__cell--right">
                                        {format_thousands(i64::from(post.views))}
                                    </td>
                                    <RowActions
                                        on_edit=Callback::new(move |_| page.open_edit(id))
                                        on_delete=Callback::new(move |_| page.delete(id, &prompt))
                                    >
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| toggle_featured(id)
                                            attr:title=if featured { "Bỏ nổi bật" } else { "Đánh dấu nổi bật" }
                                        >
                                            {icon("star")}
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
                <PostDetails page=page categories=categories />
            </Show>
        </PageFrame>
    }
}
