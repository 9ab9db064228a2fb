use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    repositories::navigator::Navigator,
    value_objects::{
        enums::sort_directions::SortDirection,
        items::{FRUITS, Item},
        page_view::ListEntry,
    },
};

pub struct ListRendererUseCase<N>
where
    N: Navigator + Send + Sync,
{
    navigator: Arc<N>,
    items: Vec<Item>,
}

impl<N> ListRendererUseCase<N>
where
    N: Navigator + Send + Sync,
{
    pub fn new(navigator: Arc<N>) -> Self {
        Self::with_items(navigator, FRUITS.to_vec())
    }

    pub fn with_items(navigator: Arc<N>, items: Vec<Item>) -> Self {
        Self { navigator, items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn sort_direction(&self) -> SortDirection {
        SortDirection::from_query(&self.navigator.query())
    }

    pub fn sorted_items(&self, direction: SortDirection) -> Vec<Item> {
        sort_items(&self.items, direction)
    }

    /// One entry per item, ordered by the direction in the current query.
    pub fn entries(&self) -> impl Iterator<Item = ListEntry> + use<N> {
        let direction = self.sort_direction();
        debug!(sort_direction = %direction, "Rendering list entries");
        self.sorted_items(direction).into_iter().map(ListEntry::from)
    }
}

pub fn sort_items(items: &[Item], direction: SortDirection) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| a.label().cmp(b.label())),
        SortDirection::Descending => sorted.sort_by(|a, b| b.label().cmp(a.label())),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        repositories::navigator::MockNavigator, value_objects::query_state::QueryState,
    };

    fn renderer_for(raw_query: &'static str) -> ListRendererUseCase<MockNavigator> {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_query()
            .returning(move || QueryState::parse(raw_query));
        ListRendererUseCase::new(Arc::new(navigator))
    }

    fn labels(renderer: &ListRendererUseCase<MockNavigator>) -> Vec<&'static str> {
        renderer.entries().map(|entry| entry.item.label()).collect()
    }

    #[test]
    fn renders_ascending_with_empty_query() {
        assert_eq!(labels(&renderer_for("")), ["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn renders_ascending_with_asc_query() {
        assert_eq!(
            labels(&renderer_for("sortOrder=asc")),
            ["Apple", "Banana", "Cherry"]
        );
    }

    #[test]
    fn renders_descending_with_desc_query() {
        assert_eq!(
            labels(&renderer_for("sortOrder=desc")),
            ["Cherry", "Banana", "Apple"]
        );
    }

    #[test]
    fn renders_ascending_with_unknown_value() {
        assert_eq!(
            labels(&renderer_for("sortOrder=sideways")),
            ["Apple", "Banana", "Cherry"]
        );
    }

    #[test]
    fn sorting_leaves_fixed_items_untouched() {
        let renderer = renderer_for("sortOrder=desc");
        let _ = renderer.sorted_items(SortDirection::Descending);

        assert_eq!(renderer.items(), FRUITS.as_slice());
    }

    #[test]
    fn entries_are_keyed_by_label() {
        let renderer = renderer_for("");

        for entry in renderer.entries() {
            assert_eq!(entry.key, entry.item.label());
        }
        assert_eq!(renderer.entries().count(), FRUITS.len());
    }
}
