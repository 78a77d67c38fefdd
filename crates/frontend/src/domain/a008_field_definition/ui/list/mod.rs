use crate::domain::a008_field_definition::ui::details::FieldDefinitionDetails;
use crate::shared::components::badge::status_badge;
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
use contracts::domain::a008_field_definition::aggregate::{
    FieldDefinition, FieldDefinitionFilter, FieldKind,
};
use contracts::domain::a008_field_definition::format::FormatKind;
use contracts::domain::a008_field_definition::position::PositionKind;
use contracts::domain::a008_field_definition::samples::{sample_formats, sample_positions};
use contracts::domain::common::{ActiveStatus, RecordId};
use contracts::shared::list_filter::{Facet, FACET_ALL};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Общая страница справочника полей для вида `K`
fn field_definition_page<K: FieldKind>(
    page_id: &'static str,
    items: Vec<FieldDefinition<K>>,
) -> impl IntoView {
    let page = CrudPage::new(items);
    let query = RwSignal::new(String::new());
    let kind = RwSignal::new(FACET_ALL.to_string());
    let status = RwSignal::new(FACET_ALL.to_string());

    let visible = Memo::new(move |_| {
        page.visible(&FieldDefinitionFilter::<K> {
            query: query.get(),
            kind: Facet::from_choice_key(&kind.get()),
            status: Facet::from_choice_key(&status.get()),
        })
    });

    let toggle_status = move |id: RecordId| {
        page.quick(id, |field| {
            field.status = field.status.toggled();
            log::info!("{}: #{} status -> {:?}", K::COLLECTION, id, field.status);
            Ok(())
        });
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <PageHeader
                title=K::LIST
                subtitle=Signal::derive(move || counter_label(visible.with(Vec::len), page.total()))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                    {icon("plus")}
                    {format!(" Thêm {}", K::ELEMENT.to_lowercase())}
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput value=query placeholder="Tìm theo tên, mã, mô tả..." />
                <FacetSelect value=kind options=Signal::derive(choice_options::<K>) all_label="Tất cả loại" />
                <FacetSelect
                    value=status
                    options=Signal::derive(choice_options::<ActiveStatus>)
                    all_label="Tất cả trạng thái"
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Tên"</th>
                            <th class="table__header-cell">"Mã"</th>
                            <th class="table__header-cell">"Loại"</th>
                            <th class="table__header-cell">"Mô tả"</th>
                            <th class="table__header-cell">"Trạng thái"</th>
                            <th class="table__header-cell table__header-cell--right">"Đang dùng"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|field| {
                            let id = field.id;
                            let prompt = delete_prompt::<FieldDefinition<K>>(&field.name);
                            let name = field.name.clone();
                            let code = field.code.clone();
                            let description = field.description.clone();
                            let active = field.status.is_active();
                            view! {
                                <tr class="table__row" on:click=move |_| page.open_edit(id)>
                                    <td class="table__cell">
                                        <div class="cell-title">
                                            {icon(field.kind.icon())}
                                            <span>{move || highlight_matches(&name, &query.get())}</span>
                                        </div>
                                    </td>
                                    <td class="table__cell table__cell--mono">
                                        {move || highlight_matches(&code, &query.get())}
                                    </td>
                                    <td class="table__cell">{field.kind.label()}</td>
                                    <td class="table__cell">
                                        {move || highlight_matches(&description, &query.get())}
                                    </td>
                                    <td class="table__cell">{status_badge(field.status)}</td>
                                    <td class="table__cell table__cell--right">{field.usage_count}</td>
                                    <RowActions
                                        on_edit=Callback::new(move |_| page.open_edit(id))
                                        on_delete=Callback::new(move |_| page.delete(id, &prompt))
                                    >
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| toggle_status(id)
                                            attr:title=if active { "Tạm tắt" } else { "Kích hoạt" }
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
                <FieldDefinitionDetails<K> page=page />
            </Show>
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FieldPositionList() -> impl IntoView {
    field_definition_page::<PositionKind>("a008_field_position--list", sample_positions())
}

#[component]
#[allow(non_snake_case)]
pub fn FieldFormatList() -> impl IntoView {
    field_definition_page::<FormatKind>("a010_field_format--list", sample_formats())
}
