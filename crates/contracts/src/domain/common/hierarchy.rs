//! Иерархия записей как арена узлов, индексированных по id.
//!
//! Записи хранятся плоским списком с `parent_id`; арена строится на лету для
//! рендера дерева, каскадного удаления и выбора родителя. Глубина не ограничена.

use super::record::{Hierarchical, RecordId};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Node {
    id: RecordId,
    /// Позиция записи в исходном списке
    position: usize,
    children: Vec<usize>,
}

/// Строка дерева для рендера: запись + глубина вложенности
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow<'a, R> {
    pub record: &'a R,
    pub depth: usize,
    pub has_children: bool,
}

/// Арена узлов иерархии.
///
/// Корнем считается узел без родителя, с родителем равным самому себе или с
/// ссылкой на отсутствующую запись. Узлы, достижимые только через цикл,
/// выводятся как корни.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    nodes: Vec<Node>,
    index: HashMap<RecordId, usize>,
    roots: Vec<usize>,
}

impl Arena {
    pub fn build<R: Hierarchical>(items: &[R]) -> Self {
        // Стабильная сортировка: sibling_order, затем порядок вставки
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by_key(|&position| items[position].sibling_order());

        let mut nodes: Vec<Node> = Vec::with_capacity(items.len());
        let mut index = HashMap::with_capacity(items.len());
        for position in order {
            let id = items[position].id();
            if index.contains_key(&id) {
                continue;
            }
            index.insert(id, nodes.len());
            nodes.push(Node {
                id,
                position,
                children: Vec::new(),
            });
        }

        let mut roots = Vec::new();
        for node_idx in 0..nodes.len() {
            let record = &items[nodes[node_idx].position];
            let parent = record
                .parent_id()
                .filter(|&parent_id| parent_id != record.id())
                .and_then(|parent_id| index.get(&parent_id).copied());
            match parent {
                Some(parent_idx) => nodes[parent_idx].children.push(node_idx),
                None => roots.push(node_idx),
            }
        }

        Self {
            nodes,
            index,
            roots,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.index.contains_key(&id)
    }

    /// Прямые потомки в порядке отображения
    pub fn children(&self, id: RecordId) -> Vec<RecordId> {
        self.index
            .get(&id)
            .map(|&idx| {
                self.nodes[idx]
                    .children
                    .iter()
                    .map(|&child| self.nodes[child].id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Все узлы ниже `id` (pre-order), без самого `id`
    pub fn descendants(&self, id: RecordId) -> Vec<RecordId> {
        let Some(&start) = self.index.get(&id) else {
            return Vec::new();
        };
        let mut visited = vec![false; self.nodes.len()];
        let mut walked = Vec::new();
        self.walk_from(start, 0, &mut visited, &mut walked);
        walked
            .into_iter()
            .skip(1)
            .map(|(idx, _)| self.nodes[idx].id)
            .collect()
    }

    pub fn is_descendant(&self, candidate: RecordId, ancestor: RecordId) -> bool {
        self.descendants(ancestor).contains(&candidate)
    }

    /// Pre-order обход всей арены: (позиция в исходном списке, глубина)
    pub fn depth_first(&self) -> Vec<(usize, usize)> {
        let mut visited = vec![false; self.nodes.len()];
        let mut walked = Vec::with_capacity(self.nodes.len());
        let starts = self.roots.iter().copied().chain(0..self.nodes.len());
        for start in starts {
            if !visited[start] {
                self.walk_from(start, 0, &mut visited, &mut walked);
            }
        }
        walked
            .into_iter()
            .map(|(idx, depth)| (self.nodes[idx].position, depth))
            .collect()
    }

    fn walk_from(
        &self,
        start: usize,
        start_depth: usize,
        visited: &mut [bool],
        out: &mut Vec<(usize, usize)>,
    ) {
        let mut stack = vec![(start, start_depth)];
        while let Some((idx, depth)) = stack.pop() {
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            out.push((idx, depth));
            for &child in self.nodes[idx].children.iter().rev() {
                if !visited[child] {
                    stack.push((child, depth + 1));
                }
            }
        }
    }
}

/// Строки дерева в порядке рендера: корень, затем его потомки с отступом
pub fn tree_rows<R: Hierarchical>(items: &[R]) -> Vec<TreeRow<'_, R>> {
    let arena = Arena::build(items);
    arena
        .depth_first()
        .into_iter()
        .map(|(position, depth)| {
            let record = &items[position];
            TreeRow {
                record,
                depth,
                has_children: !arena.children(record.id()).is_empty(),
            }
        })
        .collect()
}

/// Кандидаты в родители для формы: все узлы, кроме редактируемого и его
/// потомков (иначе получился бы цикл)
pub fn parent_candidates<R: Hierarchical>(
    items: &[R],
    editing: Option<RecordId>,
) -> Vec<TreeRow<'_, R>> {
    let excluded: Vec<RecordId> = match editing {
        Some(id) => {
            let mut ids = Arena::build(items).descendants(id);
            ids.push(id);
            ids
        }
        None => Vec::new(),
    };
    tree_rows(items)
        .into_iter()
        .filter(|row| !excluded.contains(&row.record.id()))
        .collect()
}

/// Следующее значение порядка для нового элемента под `parent`
pub fn next_sibling_order<R: Hierarchical>(items: &[R], parent: Option<RecordId>) -> i64 {
    items
        .iter()
        .filter(|item| item.parent_id() == parent)
        .map(Hierarchical::sibling_order)
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Record;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Node {
        id: RecordId,
        parent: Option<RecordId>,
        order: i64,
    }

    impl Record for Node {
        fn id(&self) -> RecordId {
            self.id
        }
        fn set_id(&mut self, id: RecordId) {
            self.id = id;
        }
        fn aggregate_index() -> &'static str {
            "t000"
        }
        fn collection_name() -> &'static str {
            "node"
        }
        fn element_name() -> &'static str {
            "Node"
        }
        fn list_name() -> &'static str {
            "Nodes"
        }
    }

    impl Hierarchical for Node {
        fn parent_id(&self) -> Option<RecordId> {
            self.parent
        }
        fn sibling_order(&self) -> i64 {
            self.order
        }
    }

    fn n(id: RecordId, parent: Option<RecordId>) -> Node {
        Node {
            id,
            parent,
            order: 0,
        }
    }

    fn layout(items: &[Node]) -> Vec<(RecordId, usize)> {
        tree_rows(items)
            .into_iter()
            .map(|row| (row.record.id, row.depth))
            .collect()
    }

    #[test]
    fn test_one_level_render_order() {
        let items = vec![n(1, None), n(2, None), n(3, Some(1)), n(4, Some(2)), n(5, Some(1))];
        assert_eq!(
            layout(&items),
            vec![(1, 0), (3, 1), (5, 1), (2, 0), (4, 1)]
        );
    }

    #[test]
    fn test_arbitrary_depth() {
        let items = vec![n(4, Some(3)), n(1, None), n(3, Some(2)), n(2, Some(1))];
        assert_eq!(layout(&items), vec![(1, 0), (2, 1), (3, 2), (4, 3)]);
    }

    #[test]
    fn test_orphans_and_self_parents_are_roots() {
        let items = vec![n(1, Some(99)), n(2, Some(2)), n(3, Some(1))];
        assert_eq!(layout(&items), vec![(1, 0), (3, 1), (2, 0)]);
    }

    #[test]
    fn test_cycle_terminates() {
        let items = vec![n(1, Some(2)), n(2, Some(1)), n(3, None)];
        let rows = layout(&items);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], (3, 0));
        assert_eq!(rows[1], (1, 0));
        assert_eq!(rows[2], (2, 1));
    }

    #[test]
    fn test_sibling_order_is_respected() {
        let items = vec![
            Node { id: 1, parent: None, order: 2 },
            Node { id: 2, parent: None, order: 1 },
            Node { id: 3, parent: Some(2), order: 5 },
            Node { id: 4, parent: Some(2), order: 3 },
        ];
        assert_eq!(layout(&items), vec![(2, 0), (4, 1), (3, 1), (1, 0)]);
    }

    #[test]
    fn test_descendants_and_parent_candidates() {
        let items = vec![n(1, None), n(2, Some(1)), n(3, Some(2)), n(4, None)];
        let arena = Arena::build(&items);
        assert_eq!(arena.descendants(1), vec![2, 3]);
        assert!(arena.is_descendant(3, 1));
        assert!(!arena.is_descendant(4, 1));
        assert!(arena.descendants(42).is_empty());

        let candidates: Vec<RecordId> = parent_candidates(&items, Some(2))
            .into_iter()
            .map(|row| row.record.id)
            .collect();
        assert_eq!(candidates, vec![1, 4]);
    }

    #[test]
    fn test_next_sibling_order() {
        let items = vec![
            Node { id: 1, parent: None, order: 1 },
            Node { id: 2, parent: None, order: 4 },
            Node { id: 3, parent: Some(1), order: 1 },
        ];
        assert_eq!(next_sibling_order(&items, None), 5);
        assert_eq!(next_sibling_order(&items, Some(1)), 2);
        assert_eq!(next_sibling_order(&items, Some(3)), 1);
    }
}
