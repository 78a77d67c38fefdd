//! Состояние страницы-списка: хранилище записей, модальная форма
//! создания/редактирования, выделение строк для массового удаления.

pub mod form;

use crate::shared::confirm::confirm;
use contracts::domain::common::hierarchy::{parent_candidates, tree_rows};
use contracts::domain::common::{
    Hierarchical, Ordered, Record, RecordForm, RecordId, RecordStore, MoveDirection,
};
use contracts::error::{StoreError, ValidationError};
use contracts::shared::list_filter::{apply_filter, ListFilter};
use leptos::prelude::*;
use std::collections::HashSet;

/// Реактивное состояние страницы со списком записей `R`.
pub struct CrudPage<R: Record> {
    pub store: RwSignal<RecordStore<R>>,
    pub selected: RwSignal<HashSet<RecordId>>,
    pub show_modal: RwSignal<bool>,
    /// `None` при создании новой записи
    pub editing: RwSignal<Option<RecordId>>,
    /// Ошибка последнего быстрого действия (в форме ошибки показываются отдельно)
    pub error: RwSignal<Option<String>>,
}

impl<R: Record> Clone for CrudPage<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record> Copy for CrudPage<R> {}

impl<R: Record> CrudPage<R> {
    pub fn new(items: Vec<R>) -> Self {
        Self {
            store: RwSignal::new(RecordStore::from_items(items)),
            selected: RwSignal::new(HashSet::new()),
            show_modal: RwSignal::new(false),
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn total(&self) -> usize {
        self.store.with(RecordStore::len)
    }

    /// Видимые строки: фильтр применяется к исходному порядку списка
    pub fn visible<F: ListFilter<R>>(&self, filter: &F) -> Vec<R> {
        self.store.with(|store| apply_filter(store.items(), filter))
    }

    pub fn get(&self, id: RecordId) -> Option<R> {
        self.store.with(|store| store.get(id).cloned())
    }

    pub fn open_create(&self) {
        self.editing.set(None);
        self.show_modal.set(true);
    }

    pub fn open_edit(&self, id: RecordId) {
        if self.store.with_untracked(|store| store.contains(id)) {
            self.editing.set(Some(id));
            self.show_modal.set(true);
        }
    }

    pub fn close(&self) {
        self.show_modal.set(false);
        self.editing.set(None);
    }

    /// Начальное значение формы: из редактируемой записи или по умолчанию
    pub fn seed_form<F>(&self) -> F
    where
        F: RecordForm<Record = R>,
    {
        self.editing
            .get_untracked()
            .and_then(|id| self.store.with_untracked(|store| store.get(id).map(F::from_record)))
            .unwrap_or_default()
    }

    /// Сохранение формы. При успехе модальное окно закрывается.
    pub fn submit<F>(&self, form: &F) -> Result<RecordId, StoreError>
    where
        F: RecordForm<Record = R>,
    {
        let editing = self.editing.get_untracked();
        let mut result = Ok(0);
        self.store.update(|store| {
            result = match editing {
                Some(id) => store.update(id, form).map(|_| id),
                None => store.create(form),
            };
        });
        if result.is_ok() {
            self.close();
        }
        result
    }

    /// Точечное изменение записи из строки списка
    pub fn quick<T, C>(&self, id: RecordId, change: C) -> Option<T>
    where
        C: FnOnce(&mut R) -> Result<T, ValidationError>,
    {
        let mut result = None;
        self.store.update(|store| match store.modify(id, change) {
            Ok(value) => result = Some(value),
            Err(e) => self.error.set(Some(e.to_string())),
        });
        if result.is_some() {
            self.error.set(None);
        }
        result
    }

    pub fn delete(&self, id: RecordId, message: &str) {
        if !confirm(message) {
            return;
        }
        self.store.update(|store| {
            if let Err(e) = store.remove(id) {
                log::warn!("{}", e);
            }
        });
        self.selected.update(|s| {
            s.remove(&id);
        });
    }

    pub fn toggle_select(&self, id: RecordId, checked: bool) {
        self.selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    }

    /// Выделить все видимые строки или снять выделение
    pub fn select_all(&self, ids: Vec<RecordId>, checked: bool) {
        if checked {
            self.selected.update(|s| s.extend(ids));
        } else {
            self.selected.set(HashSet::new());
        }
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected.with(|s| s.contains(&id))
    }

    pub fn delete_selected(&self) {
        let ids: Vec<RecordId> = self.selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        if !confirm(&format!("Xóa {} mục đã chọn?", ids.len())) {
            return;
        }
        self.store.update(|store| {
            store.remove_many(&ids);
        });
        self.selected.set(HashSet::new());
    }
}

/// Строка дерева, готовая к рендеру
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLine<R> {
    pub record: R,
    pub depth: usize,
    pub has_children: bool,
}

impl<R: Hierarchical> CrudPage<R> {
    /// Дерево в порядке обхода; строки, не прошедшие фильтр, скрываются,
    /// отступ остальных сохраняется.
    pub fn visible_tree<F: ListFilter<R>>(&self, filter: &F) -> Vec<TreeLine<R>> {
        self.store.with(|store| {
            tree_rows(store.items())
                .into_iter()
                .filter(|row| filter.matches(row.record))
                .map(|row| TreeLine {
                    record: row.record.clone(),
                    depth: row.depth,
                    has_children: row.has_children,
                })
                .collect()
        })
    }

    /// Опции выбора родителя для формы: без редактируемой записи и её потомков
    pub fn parent_options<L>(&self, label: L) -> Vec<(RecordId, String)>
    where
        L: Fn(&R) -> String,
    {
        let editing = self.editing.get_untracked();
        self.store.with_untracked(|store| {
            parent_candidates(store.items(), editing)
                .into_iter()
                .map(|row| {
                    let indent = "— ".repeat(row.depth);
                    (row.record.id(), format!("{}{}", indent, label(row.record)))
                })
                .collect()
        })
    }

    /// Удаление записи вместе со всеми потомками
    pub fn delete_subtree(&self, id: RecordId, message: &str) {
        if !confirm(message) {
            return;
        }
        self.store.update(|store| match store.remove_subtree(id) {
            Ok(removed) => log::debug!("cascade removed {:?}", removed),
            Err(e) => log::warn!("{}", e),
        });
    }
}

impl<R: Ordered> CrudPage<R> {
    pub fn move_within<K, G>(&self, id: RecordId, direction: MoveDirection, group_of: G)
    where
        K: PartialEq,
        G: Fn(&R) -> K,
    {
        self.store.update(|store| {
            if let Err(e) = store.move_within(id, direction, group_of) {
                log::warn!("{}", e);
            }
        });
    }
}

/// Счётчик "N / M" над таблицей
pub fn counter_label(visible: usize, total: usize) -> String {
    format!("Hiển thị {} / {}", visible, total)
}

/// Текст подтверждения удаления записи
pub fn delete_prompt<R: Record>(title: &str) -> String {
    format!("Xóa {} \"{}\"?", R::element_name().to_lowercase(), title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::Product;

    #[test]
    fn test_counter_label() {
        assert_eq!(counter_label(3, 9), "Hiển thị 3 / 9");
        assert_eq!(counter_label(0, 0), "Hiển thị 0 / 0");
    }

    #[test]
    fn test_delete_prompt() {
        assert_eq!(
            delete_prompt::<Product>("AirPods Pro 2"),
            "Xóa sản phẩm \"AirPods Pro 2\"?"
        );
    }
}
