//! In-memory хранилище записей одной страницы.
//!
//! Порядок вставки сохраняется; новые записи получают `max(id) + 1`.
//! Каждая успешная мутация пишется в лог с именем коллекции и id.

use super::hierarchy::Arena;
use super::record::{Hierarchical, Ordered, Record, RecordForm, RecordId};
use crate::error::{StoreError, ValidationError};
use serde::{Deserialize, Serialize};

/// Направление перемещения среди соседей
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore<R> {
    items: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<R>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// `max(id) + 1`, для пустого списка 1
    pub fn next_id(&self) -> RecordId {
        self.items
            .iter()
            .map(Record::id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Полная замена содержимого (например, после загрузки из удалённой таблицы)
    pub fn replace_all(&mut self, items: Vec<R>) {
        log::debug!("{}: replaced with {} rows", R::collection_name(), items.len());
        self.items = items;
    }

    /// Создание записи из формы. Возвращает назначенный id.
    pub fn create<F>(&mut self, form: &F) -> Result<RecordId, StoreError>
    where
        F: RecordForm<Record = R>,
    {
        form.validate()?;
        let id = self.next_id();
        let mut record = form.create(id);
        record.set_id(id);
        self.check_unique(&record)?;
        self.items.push(record);
        log::info!("{}: created #{}", R::collection_name(), id);
        Ok(id)
    }

    /// Слияние полей формы с записью `id`; id и нередактируемые поля сохраняются.
    pub fn update<F>(&mut self, id: RecordId, form: &F) -> Result<(), StoreError>
    where
        F: RecordForm<Record = R>,
    {
        form.validate()?;
        self.modify(id, |record| {
            form.apply(record);
            Ok(())
        })?;
        log::info!("{}: updated #{}", R::collection_name(), id);
        Ok(())
    }

    /// Точечное изменение записи (быстрые действия: статус, флаги).
    ///
    /// Изменение применяется к копии и записывается только если `change` и
    /// проверка уникальности прошли успешно.
    pub fn modify<T, C>(&mut self, id: RecordId, change: C) -> Result<T, StoreError>
    where
        C: FnOnce(&mut R) -> Result<T, ValidationError>,
    {
        let index = self.position(id)?;
        let mut updated = self.items[index].clone();
        let result = change(&mut updated)?;
        updated.set_id(id);
        self.check_unique(&updated)?;
        self.items[index] = updated;
        Ok(result)
    }

    pub fn remove(&mut self, id: RecordId) -> Result<R, StoreError> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        log::info!("{}: deleted #{}", R::collection_name(), id);
        Ok(removed)
    }

    /// Удаление набора записей; отсутствующие id пропускаются. Возвращает число удалённых.
    pub fn remove_many(&mut self, ids: &[RecordId]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !ids.contains(&item.id()));
        let removed = before - self.items.len();
        if removed > 0 {
            log::info!("{}: deleted {} rows {:?}", R::collection_name(), removed, ids);
        }
        removed
    }

    fn position(&self, id: RecordId) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(StoreError::NotFound {
                collection: R::collection_name(),
                id,
            })
    }

    fn check_unique(&self, candidate: &R) -> Result<(), ValidationError> {
        let Some((field, value)) = candidate.unique_key() else {
            return Ok(());
        };
        let taken = self.items.iter().any(|item| {
            item.id() != candidate.id()
                && item
                    .unique_key()
                    .is_some_and(|(_, other)| other == value)
        });
        if taken {
            Err(ValidationError::Duplicate {
                field,
                value: value.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl<R: Hierarchical> RecordStore<R> {
    /// Удаление записи вместе со всеми потомками. Возвращает удалённые id.
    pub fn remove_subtree(&mut self, id: RecordId) -> Result<Vec<RecordId>, StoreError> {
        self.position(id)?;
        let mut ids = vec![id];
        ids.extend(Arena::build(&self.items).descendants(id));
        self.remove_many(&ids);
        Ok(ids)
    }
}

impl<R: Ordered> RecordStore<R> {
    /// Следующий порядковый номер среди записей той же группы
    pub fn next_order<K, G>(&self, group: &K, group_of: G) -> i64
    where
        K: PartialEq,
        G: Fn(&R) -> K,
    {
        self.items
            .iter()
            .filter(|item| &group_of(item) == group)
            .map(Ordered::order)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Меняет местами запись с соседом в пределах группы `group_of`.
    ///
    /// Соседи перенумеровываются 1..n в текущем порядке, затем обмениваются
    /// номерами. Возвращает `false`, если запись уже крайняя.
    pub fn move_within<K, G>(
        &mut self,
        id: RecordId,
        direction: MoveDirection,
        group_of: G,
    ) -> Result<bool, StoreError>
    where
        K: PartialEq,
        G: Fn(&R) -> K,
    {
        let index = self.position(id)?;
        let group = group_of(&self.items[index]);

        let mut siblings: Vec<usize> = (0..self.items.len())
            .filter(|&i| group_of(&self.items[i]) == group)
            .collect();
        siblings.sort_by_key(|&i| self.items[i].order());

        let Some(current) = siblings.iter().position(|&i| i == index) else {
            return Ok(false);
        };
        let neighbour = match direction {
            MoveDirection::Up if current > 0 => current - 1,
            MoveDirection::Down if current + 1 < siblings.len() => current + 1,
            _ => return Ok(false),
        };

        for (rank, &i) in siblings.iter().enumerate() {
            self.items[i].set_order(rank as i64 + 1);
        }
        let (a, b) = (siblings[current], siblings[neighbour]);
        let order_a = self.items[a].order();
        let order_b = self.items[b].order();
        self.items[a].set_order(order_b);
        self.items[b].set_order(order_a);

        log::info!(
            "{}: moved #{} {:?}",
            R::collection_name(),
            id,
            direction
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::require;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Tag {
        id: RecordId,
        name: String,
        slug: String,
        uses: u32,
        parent: Option<RecordId>,
        order: i64,
    }

    impl Record for Tag {
        fn id(&self) -> RecordId {
            self.id
        }
        fn set_id(&mut self, id: RecordId) {
            self.id = id;
        }
        fn unique_key(&self) -> Option<(&'static str, &str)> {
            Some(("slug", &self.slug))
        }
        fn aggregate_index() -> &'static str {
            "t001"
        }
        fn collection_name() -> &'static str {
            "tag"
        }
        fn element_name() -> &'static str {
            "Tag"
        }
        fn list_name() -> &'static str {
            "Tags"
        }
    }

    impl Hierarchical for Tag {
        fn parent_id(&self) -> Option<RecordId> {
            self.parent
        }
    }

    impl Ordered for Tag {
        fn order(&self) -> i64 {
            self.order
        }
        fn set_order(&mut self, order: i64) {
            self.order = order;
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TagForm {
        name: String,
        slug: String,
        parent: Option<RecordId>,
    }

    impl RecordForm for TagForm {
        type Record = Tag;

        fn from_record(record: &Tag) -> Self {
            Self {
                name: record.name.clone(),
                slug: record.slug.clone(),
                parent: record.parent,
            }
        }

        fn create(&self, id: RecordId) -> Tag {
            Tag {
                id,
                name: self.name.clone(),
                slug: self.slug.clone(),
                uses: 0,
                parent: self.parent,
                order: 0,
            }
        }

        fn apply(&self, record: &mut Tag) {
            record.name = self.name.clone();
            record.slug = self.slug.clone();
            record.parent = self.parent;
        }

        fn validate(&self) -> Result<(), ValidationError> {
            require("name", &self.name)
        }
    }

    fn tag(id: RecordId, slug: &str, parent: Option<RecordId>, order: i64) -> Tag {
        Tag {
            id,
            name: slug.to_uppercase(),
            slug: slug.to_string(),
            uses: id as u32 * 10,
            parent,
            order,
        }
    }

    fn form(name: &str, slug: &str) -> TagForm {
        TagForm {
            name: name.to_string(),
            slug: slug.to_string(),
            parent: None,
        }
    }

    #[test]
    fn test_create_assigns_max_plus_one() {
        let mut store = RecordStore::from_items(vec![tag(3, "a", None, 1), tag(7, "b", None, 2)]);
        assert_eq!(store.create(&form("C", "c")), Ok(8));
        assert_eq!(store.items().last().map(|t| t.id), Some(8));

        let mut empty: RecordStore<Tag> = RecordStore::new();
        assert_eq!(empty.create(&form("A", "a")), Ok(1));
    }

    #[test]
    fn test_update_merges_only_form_fields() {
        let mut store = RecordStore::from_items(vec![tag(1, "a", None, 1), tag(2, "b", None, 2)]);
        store.update(2, &form("Bee", "bee")).unwrap();
        let updated = store.get(2).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "Bee");
        assert_eq!(updated.slug, "bee");
        assert_eq!(updated.uses, 20);
        assert_eq!(updated.order, 2);
        assert_eq!(store.get(1), Some(&tag(1, "a", None, 1)));
    }

    #[test]
    fn test_unchanged_edit_is_idempotent() {
        let mut store = RecordStore::from_items(vec![tag(1, "a", None, 1)]);
        let before = serde_json::to_string(&store).unwrap();
        let seeded = TagForm::from_record(store.get(1).unwrap());
        store.update(1, &seeded).unwrap();
        assert_eq!(serde_json::to_string(&store).unwrap(), before);
    }

    #[test]
    fn test_validation_and_duplicates_block_mutation() {
        let mut store = RecordStore::from_items(vec![tag(1, "a", None, 1), tag(2, "b", None, 2)]);
        let snapshot = store.clone();

        assert_eq!(
            store.create(&form("  ", "x")),
            Err(StoreError::Validation(ValidationError::Required { field: "name" }))
        );
        assert_eq!(
            store.update(2, &form("A again", "a")),
            Err(StoreError::Validation(ValidationError::Duplicate {
                field: "slug",
                value: "a".to_string()
            }))
        );
        assert_eq!(store, snapshot);

        // keeping its own slug is not a duplicate
        assert!(store.update(1, &form("A", "a")).is_ok());
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut store = RecordStore::from_items(vec![
            tag(1, "a", None, 1),
            tag(2, "b", Some(1), 1),
            tag(3, "c", None, 2),
        ]);
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.id, 1);
        let ids: Vec<_> = store.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(
            store.remove(1),
            Err(StoreError::NotFound {
                collection: "tag",
                id: 1
            })
        );
    }

    #[test]
    fn test_remove_subtree_cascades() {
        let mut store = RecordStore::from_items(vec![
            tag(1, "a", None, 1),
            tag(2, "b", Some(1), 1),
            tag(3, "c", None, 2),
            tag(4, "d", Some(1), 2),
            tag(5, "e", Some(3), 1),
        ]);
        let removed = store.remove_subtree(1).unwrap();
        assert_eq!(removed, vec![1, 2, 4]);
        let ids: Vec<_> = store.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 5]);
    }

    #[test]
    fn test_remove_many_skips_unknown() {
        let mut store = RecordStore::from_items(vec![tag(1, "a", None, 1), tag(2, "b", None, 2)]);
        assert_eq!(store.remove_many(&[2, 9]), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_move_within_group() {
        let mut store = RecordStore::from_items(vec![
            tag(1, "a", None, 10),
            tag(2, "b", None, 20),
            tag(3, "c", Some(1), 1),
            tag(4, "d", None, 30),
        ]);
        assert_eq!(store.move_within(4, MoveDirection::Up, |t| t.parent), Ok(true));
        let order = |store: &RecordStore<Tag>, id| store.get(id).unwrap().order;
        assert_eq!(order(&store, 1), 1);
        assert_eq!(order(&store, 4), 2);
        assert_eq!(order(&store, 2), 3);
        // child group untouched
        assert_eq!(order(&store, 3), 1);

        assert_eq!(store.move_within(1, MoveDirection::Up, |t| t.parent), Ok(false));
        assert_eq!(store.move_within(3, MoveDirection::Down, |t| t.parent), Ok(false));
        assert_eq!(store.next_order(&None, |t| t.parent), 4);
    }
}
