//! Редактор главной страницы: порядок и видимость секций + предпросмотр.

use crate::domain::a009_home_section::ui::details::HomeSectionDetails;
use crate::shared::components::badge::kind_badge;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud::{delete_prompt, CrudPage};
use crate::shared::icons::icon;
use crate::shared::list_utils::EmptyState;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_EDITOR;
use contracts::domain::a009_home_section::aggregate::{sorted_sections, HomeSection};
use contracts::domain::a009_home_section::samples::sample_home_sections;
use contracts::domain::common::{MoveDirection, RecordId};
use contracts::shared::choice::Choice;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
#[allow(non_snake_case)]
pub fn HomeEditor() -> impl IntoView {
    let page = CrudPage::new(sample_home_sections());
    let sections = Memo::new(move |_| page.store.with(|store| sorted_sections(store.items())));
    let visible_count = move || sections.with(|s| s.iter().filter(|x| x.visible).count());

    let move_section = move |id: RecordId, direction: MoveDirection| {
        page.move_within(id, direction, |_: &HomeSection| ());
    };
    let toggle_visible = move |id: RecordId| {
        page.quick(id, |section| {
            section.visible = !section.visible;
            log::info!("home_section: #{} visible={}", id, section.visible);
            Ok(())
        });
    };

    view! {
        <PageFrame page_id="a009_home_section--editor" category=PAGE_CAT_EDITOR>
            <PageHeader
                title="Trang chủ"
                subtitle=Signal::derive(move || {
                    format!("{} / {} khối đang hiển thị", visible_count(), sections.with(Vec::len))
                })
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                    {icon("plus")}
                    " Thêm khối"
                </Button>
            </PageHeader>

            <div class="home-editor">
                <div class="home-editor__sections">
                    {move || {
                        let rows = sections.get();
                        let last = rows.len().saturating_sub(1);
                        rows.into_iter().enumerate().map(|(index, section)| {
                            let id = section.id;
                            let prompt = delete_prompt::<HomeSection>(&section.title);
                            let visible = section.visible;
                            view! {
                                <div class="section-row" class:section-row--hidden=!visible>
                                    <span class="section-row__order">{section.order}</span>
                                    <div class="section-row__body" on:click=move |_| page.open_edit(id)>
                                        <div class="section-row__title">{section.title.clone()}</div>
                                        <div class="cell-subtitle">{kind_badge(section.kind)}" "{section.subtitle.clone()}</div>
                                    </div>
                                    <div class="row-actions">
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            disabled=index == 0
                                            on_click=move |_| move_section(id, MoveDirection::Up)
                                        >
                                            {icon("arrow-up")}
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            disabled=index == last
                                            on_click=move |_| move_section(id, MoveDirection::Down)
                                        >
                                            {icon("arrow-down")}
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| toggle_visible(id)
                                            attr:title=if visible { "Ẩn" } else { "Hiện" }
                                        >
                                            {icon(if visible { "eye" } else { "eye-off" })}
                                        </Button>
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
                            }
                        }).collect_view()
                    }}
                    <Show when=move || sections.with(Vec::is_empty)>
                        <EmptyState message="Chưa có khối nào" />
                    </Show>
                </div>

                <CardAnimated title="Xem trước">
                    <div class="home-preview">
                        {move || sections.get().into_iter().filter(|s| s.visible).map(|section| view! {
                            <div class=format!("home-preview__block home-preview__block--{}", section.kind.key())>
                                <strong>{section.title}</strong>
                                <span>{section.subtitle}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </CardAnimated>
            </div>

            <Show when=move || page.show_modal.get()>
                <HomeSectionDetails page=page />
            </Show>
        </PageFrame>
    }
}
