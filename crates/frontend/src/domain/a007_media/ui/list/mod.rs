use crate::domain::a007_media::ui::details::MediaDetails;
use crate::shared::components::badge::kind_badge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::table_footer::TableFooter;
use crate::shared::crud::{counter_label, delete_prompt, CrudPage};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    choice_options, highlight_matches, EmptyState, FacetSelect, SearchInput,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a007_media::aggregate::{
    folder_counts, MediaFilter, MediaFolder, MediaItem, MediaKind,
};
use contracts::domain::a007_media::samples::sample_media;
use contracts::domain::common::RecordId;
use contracts::shared::choice::Choice;
use contracts::shared::list_filter::{Facet, FACET_ALL};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Checkbox};

/// Способ отображения файлов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaView {
    Grid,
    List,
}

fn preview(item: &MediaItem) -> AnyView {
    match item.kind {
        MediaKind::Image => view! {
            <img class="media-card__image" src=item.url.clone() alt=item.alt_text.clone() />
        }
        .into_any(),
        MediaKind::Video => icon("video"),
        MediaKind::Document => icon("file-text"),
        MediaKind::Other => icon("folder"),
    }
}

fn media_card(page: CrudPage<MediaItem>, item: MediaItem, query: RwSignal<String>) -> impl IntoView {
    let id = item.id;
    let prompt = delete_prompt::<MediaItem>(&item.file_name);
    let file_name = item.file_name.clone();
    view! {
        <div class="media-card" class:media-card--selected=move || page.is_selected(id)>
            <div class="media-card__preview" on:click=move |_| page.open_edit(id)>
                {preview(&item)}
            </div>
            <div class="media-card__body">
                <label class="media-card__select">
                    <input
                        type="checkbox"
                        prop:checked=move || page.is_selected(id)
                        on:change=move |ev| page.toggle_select(id, event_target_checked(&ev))
                    />
                    <span class="media-card__name">
                        {move || highlight_matches(&file_name, &query.get())}
                    </span>
                </label>
                <div class="media-card__meta">
                    {kind_badge(item.kind)}
                    <span>{item.size_label()}</span>
                    <span>{format_date(&item.uploaded_at)}</span>
                </div>
                <div class="media-card__actions">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| page.open_edit(id)
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| page.delete(id, &prompt)
                    >
                        {icon("delete")}
                    </Button>
                </div>
            </div>
        </div>
    }
}

fn media_row(page: CrudPage<MediaItem>, item: MediaItem, query: RwSignal<String>) -> impl IntoView {
    let id = item.id;
    let prompt = delete_prompt::<MediaItem>(&item.file_name);
    let file_name = item.file_name.clone();
    view! {
        <tr class="table__row" class:table__row--selected=move || page.is_selected(id)>
            <td class="table__cell table__cell--checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || page.is_selected(id)
                    on:change=move |ev| page.toggle_select(id, event_target_checked(&ev))
                />
            </td>
            <td class="table__cell">
                <div class="cell-title">
                    <span class="media-thumb">{preview(&item)}</span>
                    <span>{move || highlight_matches(&file_name, &query.get())}</span>
                </div>
            </td>
            <td class="table__cell">{item.folder.label()}</td>
            <td class="table__cell">{kind_badge(item.kind)}</td>
            <td class="table__cell table__cell--right">{item.size_label()}</td>
            <td class="table__cell">{format_date(&item.uploaded_at)}</td>
            <RowActions
                on_edit=Callback::new(move |_| page.open_edit(id))
                on_delete=Callback::new(move |_| page.delete(id, &prompt))
            />
        </tr>
    }
}

/// Thư viện media: папки слева, сетка или таблица файлов с массовым удалением
#[component]
#[allow(non_snake_case)]
pub fn MediaList() -> impl IntoView {
    let page = CrudPage::new(sample_media());
    let query = RwSignal::new(String::new());
    let folder = RwSignal::new(FACET_ALL.to_string());
    let kind = RwSignal::new(FACET_ALL.to_string());
    let mode = RwSignal::new(MediaView::Grid);

    let visible = Memo::new(move |_| {
        page.visible(&MediaFilter {
            query: query.get(),
            folder: Facet::from_choice_key(&folder.get()),
            kind: Facet::from_choice_key(&kind.get()),
        })
    });
    let counts = Memo::new(move |_| page.store.with(|store| folder_counts(store.items())));
    let selected_count = move || page.selected.with(|s| s.len());

    let all_selected = RwSignal::new(false);
    Effect::new(move |_| {
        let checked = all_selected.get();
        let ids: Vec<RecordId> = visible.with_untracked(|rows| rows.iter().map(|m| m.id).collect());
        page.select_all(ids, checked);
    });

    let folder_button = move |key: &'static str, label: &'static str, count: Signal<usize>| {
        view! {
            <button
                class="media-folders__item"
                class:media-folders__item--active=move || folder.get() == key
                on:click=move |_| folder.set(key.to_string())
            >
                {icon("folder")}
                <span class="media-folders__name">{label}</span>
                <span class="media-folders__count">{move || count.get()}</span>
            </button>
        }
    };

    view! {
        <PageFrame page_id="a007_media--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Thư viện media"
                subtitle=Signal::derive(move || counter_label(visible.with(Vec::len), page.total()))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        page.delete_selected();
                        all_selected.set(false);
                    }
                    disabled=Signal::derive(move || selected_count() == 0)
                >
                    {icon("delete")}
                    {move || format!(" Xóa ({})", selected_count())}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                    {icon("plus")}
                    " Thêm tệp"
                </Button>
            </PageHeader>

            <div class="media-layout">
                <aside class="media-folders">
                    <h3 class="media-folders__title">"Thư mục"</h3>
                    {folder_button(FACET_ALL, "Tất cả", Signal::derive(move || page.total()))}
                    {MediaFolder::ALL.iter().map(|f| {
                        let f = *f;
                        let count = Signal::derive(move || {
                            counts.with(|c| c.iter().find(|(k, _)| *k == f).map_or(0, |(_, n)| *n))
                        });
                        folder_button(f.key(), f.label(), count)
                    }).collect_view()}
                </aside>

                <div class="media-main">
                    <div class="filter-bar">
                        <SearchInput value=query placeholder="Tìm theo tên tệp, alt..." />
                        <FacetSelect
                            value=kind
                            options=Signal::derive(choice_options::<MediaKind>)
                            all_label="Tất cả loại"
                        />
                        <Checkbox checked=all_selected label="Chọn tất cả" />
                        <div class="view-toggle">
                            <Button
                                size=ButtonSize::Small
                                appearance=move || if mode.get() == MediaView::Grid {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                                on_click=move |_| mode.set(MediaView::Grid)
                                attr:title="Dạng lưới"
                            >
                                {icon("grid")}
                            </Button>
                            <Button
                                size=ButtonSize::Small
                                appearance=move || if mode.get() == MediaView::List {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                                on_click=move |_| mode.set(MediaView::List)
                                attr:title="Dạng danh sách"
                            >
                                {icon("list")}
                            </Button>
                        </div>
                    </div>

                    {move || match mode.get() {
                        MediaView::Grid => view! {
                            <div class="media-grid">
                                {move || visible.get().into_iter()
                                    .map(|item| media_card(page, item, query))
                                    .collect_view()}
                            </div>
                        }.into_any(),
                        MediaView::List => view! {
                            <div class="table-container">
                                <table class="table__data table--striped">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell"></th>
                                            <th class="table__header-cell">"Tên tệp"</th>
                                            <th class="table__header-cell">"Thư mục"</th>
                                            <th class="table__header-cell">"Loại"</th>
                                            <th class="table__header-cell table__header-cell--right">"Dung lượng"</th>
                                            <th class="table__header-cell">"Ngày tải lên"</th>
                                            <th class="table__header-cell"></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || visible.get().into_iter()
                                            .map(|item| media_row(page, item, query))
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_any(),
                    }}
                    <Show when=move || visible.with(Vec::is_empty)>
                        <EmptyState />
                    </Show>
                    <TableFooter
                        visible=Signal::derive(move || visible.with(Vec::len))
                        total=Signal::derive(move || page.total())
                    />
                </div>
            </div>

            <Show when=move || page.show_modal.get()>
                <MediaDetails page=page />
            </Show>
        </PageFrame>
    }
}
