use std::sync::Arc;

/// One entry of the context menu. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    /// Opaque key, unique within a well-formed registry.
    pub id: String,
    /// Display text shown in the menu.
    pub label: String,
    /// Display resource for a custom icon; empty means the default icon.
    pub icon: String,
    /// Shown only while the extended trigger (Shift) is held.
    pub extended_only: bool,
}

impl ActionItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        extended_only: bool,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            extended_only,
        }
    }
}

/// Ordered list of actions, shared as an immutable snapshot.
///
/// Insertion order is display order. Cloning is cheap; all clones observe the
/// same snapshot, so enumeration over any cursor is stable for the snapshot's
/// lifetime.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    actions: Arc<[ActionItem]>,
}

impl ActionRegistry {
    pub fn new(actions: Vec<ActionItem>) -> Self {
        Self {
            actions: actions.into(),
        }
    }

    /// The built-in stub actions, used until settings provide a real list.
    pub fn builtin() -> Self {
        Self::new(vec![
            ActionItem::new("open_ps_here", "Open PowerShell here", "", false),
            ActionItem::new("copy_path", "Copy full path", "", true),
        ])
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ActionItem> {
        self.actions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionItem> {
        self.actions.iter()
    }

    /// A fresh cursor over this snapshot, positioned at the start.
    pub fn cursor(&self) -> ActionCursor {
        ActionCursor {
            registry: self.clone(),
            index: 0,
        }
    }
}

/// Result of one batch fetch from an [`ActionCursor`].
#[derive(Debug)]
pub struct Fetch {
    /// Items produced, in registry order. Never longer than the requested max.
    pub items: Vec<ActionItem>,
    /// Whether items remain past this batch.
    pub more: bool,
}

/// Forward-only cursor over an [`ActionRegistry`] snapshot.
///
/// The position only moves forward except through [`reset`](Self::reset), and
/// never exceeds the snapshot length. `Clone` yields an independent cursor at
/// the same position over the same snapshot.
#[derive(Debug, Clone)]
pub struct ActionCursor {
    registry: ActionRegistry,
    index: usize,
}

impl ActionCursor {
    /// Produces up to `max` items, advancing by the number produced.
    pub fn fetch_next(&mut self, max: usize) -> Fetch {
        let end = (self.index + max).min(self.registry.len());
        let items = self.registry.actions[self.index..end].to_vec();
        self.index = end;
        Fetch {
            items,
            more: self.index < self.registry.len(),
        }
    }

    /// Advances by `n`, clamped to the snapshot length.
    pub fn skip(&mut self, n: usize) {
        self.index = self.index.saturating_add(n).min(self.registry.len());
    }

    /// Returns the cursor to the start of the snapshot.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn position(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(len: usize) -> ActionRegistry {
        ActionRegistry::new(
            (0..len)
                .map(|i| ActionItem::new(format!("action_{i}"), format!("Action {i}"), "", false))
                .collect(),
        )
    }

    #[test]
    fn test_fetch_in_batches_yields_all_items_in_order() {
        for batch in 1..=4 {
            let mut cursor = registry(3).cursor();
            let mut seen = Vec::new();
            loop {
                let fetch = cursor.fetch_next(batch);
                assert!(fetch.items.len() <= batch);
                seen.extend(fetch.items);
                if !fetch.more {
                    break;
                }
            }
            let ids: Vec<_> = seen.iter().map(|a| a.id.as_str()).collect();
            assert_eq!(ids, vec!["action_0", "action_1", "action_2"]);
        }
    }

    #[test]
    fn test_fetch_past_end_is_empty_and_exhausted() {
        let mut cursor = registry(2).cursor();
        cursor.fetch_next(2);
        let fetch = cursor.fetch_next(1);
        assert!(fetch.items.is_empty());
        assert!(!fetch.more);
    }

    #[test]
    fn test_skip_matches_discarded_single_fetches() {
        let len = 4;
        for n in 0..=len {
            let mut skipped = registry(len).cursor();
            skipped.skip(n);

            let mut fetched = registry(len).cursor();
            for _ in 0..n {
                fetched.fetch_next(1);
            }

            assert_eq!(skipped.position(), fetched.position());
            let a = skipped.fetch_next(len);
            let b = fetched.fetch_next(len);
            assert_eq!(a.items, b.items);
            assert_eq!(a.more, b.more);
        }
    }

    #[test]
    fn test_skip_clamps_at_end() {
        let mut cursor = registry(3).cursor();
        cursor.skip(100);
        assert_eq!(cursor.position(), 3);
        assert!(!cursor.fetch_next(1).more);
    }

    #[test]
    fn test_clones_advance_independently() {
        let mut original = registry(3).cursor();
        original.fetch_next(1);

        let mut clone = original.clone();
        assert_eq!(clone.position(), 1);

        original.fetch_next(1);
        assert_eq!(clone.fetch_next(1).items[0].id, "action_1");

        clone.fetch_next(1);
        assert_eq!(original.position(), 2);
        assert_eq!(original.fetch_next(1).items[0].id, "action_2");
    }

    #[test]
    fn test_reset_reproduces_the_sequence() {
        let mut cursor = registry(3).cursor();
        let first: Vec<_> = cursor.fetch_next(3).items;
        cursor.reset();
        assert_eq!(cursor.position(), 0);
        let second: Vec<_> = cursor.fetch_next(3).items;
        assert_eq!(first, second);
    }

    #[test]
    fn test_builtin_registry_enumeration_statuses() {
        let mut cursor = ActionRegistry::builtin().cursor();

        let first = cursor.fetch_next(1);
        assert_eq!(first.items.len(), 1);
        assert_eq!(first.items[0].id, "open_ps_here");
        assert!(first.more);

        let second = cursor.fetch_next(1);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].id, "copy_path");
        assert!(second.items[0].extended_only);
        assert!(!second.more);
    }

    #[test]
    fn test_zero_length_registry() {
        let mut cursor = registry(0).cursor();
        let fetch = cursor.fetch_next(5);
        assert!(fetch.items.is_empty());
        assert!(!fetch.more);
        cursor.skip(1);
        assert_eq!(cursor.position(), 0);
    }
}
