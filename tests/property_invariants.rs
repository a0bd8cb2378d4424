use std::sync::Arc;

use proptest::prelude::*;

use toyshelf::{
    catalog::Catalog,
    core::{
        OwnershipLookup,
        wishlist::{WishlistDraft, WishlistQuery, WishlistSort},
    },
    query::search::{InclusionFilter, SearchQuery, SortKey},
    shelf::Shelf,
    types::Priority,
};

#[derive(Debug, Clone)]
enum Action {
    ToggleOwned { idx: u8 },
    ToggleFavorite { idx: u8 },
    SetPhoto { idx: u8 },
    Wish { idx: u8, priority: u8 },
    Unwish { idx: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        any::<u8>().prop_map(|idx| Action::ToggleOwned { idx }),
        any::<u8>().prop_map(|idx| Action::ToggleFavorite { idx }),
        any::<u8>().prop_map(|idx| Action::SetPhoto { idx }),
        (any::<u8>(), 0u8..4).prop_map(|(idx, priority)| Action::Wish { idx, priority }),
        any::<u8>().prop_map(|idx| Action::Unwish { idx }),
    ]
}

fn release_ids(catalog: &Catalog) -> Vec<String> {
    catalog.releases().map(|r| r.id.clone()).collect()
}

fn pick(ids: &[String], idx: u8) -> &str {
    &ids[usize::from(idx) % ids.len()]
}

fn apply(shelf: &mut Shelf, ids: &[String], action: &Action) {
    match *action {
        Action::ToggleOwned { idx } => {
            shelf.toggle_owned(pick(ids, idx));
        }
        Action::ToggleFavorite { idx } => {
            shelf.toggle_favorite(pick(ids, idx));
        }
        Action::SetPhoto { idx } => {
            shelf.set_photo(pick(ids, idx), vec![idx]);
        }
        Action::Wish { idx, priority } => {
            let draft = WishlistDraft {
                priority: Priority::ALL[usize::from(priority)],
                ..WishlistDraft::new(pick(ids, idx))
            };
            shelf.add_to_wishlist(draft);
        }
        Action::Unwish { idx } => {
            shelf.remove_from_wishlist(pick(ids, idx));
        }
    }
}

proptest! {
    #[test]
    fn random_sequences_keep_store_invariants(actions in prop::collection::vec(action_strategy(), 1..120)) {
        let catalog = Arc::new(Catalog::builtin());
        let ids = release_ids(&catalog);
        let total = catalog.total_releases() as f64;
        let mut shelf = Shelf::in_memory(Arc::clone(&catalog));

        for action in &actions {
            apply(&mut shelf, &ids, action);

            let collection = shelf.collection();
            let expected = collection.owned_count() as f64 / total * 100.0;
            prop_assert_eq!(collection.completion_percentage(), expected);

            for item in shelf.wishlist().items() {
                prop_assert!(!collection.is_owned(&item.release_id));
            }

            let mut wished: Vec<&str> = shelf.wishlist().items().iter().map(|i| i.release_id.as_str()).collect();
            let n = wished.len();
            wished.sort_unstable();
            wished.dedup();
            prop_assert_eq!(wished.len(), n);
        }
    }

    #[test]
    fn toggling_owned_twice_restores_membership_and_drops_photo(idx in any::<u8>(), start_owned in any::<bool>()) {
        let catalog = Arc::new(Catalog::builtin());
        let ids = release_ids(&catalog);
        let id = pick(&ids, idx).to_string();
        let mut shelf = Shelf::in_memory(catalog);
        if start_owned {
            shelf.toggle_owned(&id);
        }

        shelf.toggle_owned(&id);
        shelf.set_photo(&id, vec![7]);
        shelf.toggle_owned(&id);

        prop_assert_eq!(shelf.collection().is_owned(&id), start_owned);
        prop_assert!(!shelf.collection().has_photo(&id));
    }

    #[test]
    fn unowning_always_clears_photo(idx in any::<u8>()) {
        let catalog = Arc::new(Catalog::builtin());
        let ids = release_ids(&catalog);
        let id = pick(&ids, idx).to_string();
        let mut shelf = Shelf::in_memory(catalog);

        shelf.toggle_owned(&id);
        shelf.set_photo(&id, vec![1, 2]);
        prop_assert!(!shelf.toggle_owned(&id));
        prop_assert!(!shelf.collection().has_photo(&id));
    }

    #[test]
    fn wishlist_add_twice_keeps_one(idx in any::<u8>()) {
        let catalog = Arc::new(Catalog::builtin());
        let ids = release_ids(&catalog);
        let id = pick(&ids, idx).to_string();
        let mut shelf = Shelf::in_memory(catalog);

        prop_assert!(shelf.add_to_wishlist(WishlistDraft::new(id.clone())).is_some());
        prop_assert!(shelf.add_to_wishlist(WishlistDraft::new(id.clone())).is_none());
        let matching = shelf.wishlist().items().iter().filter(|i| i.release_id == id).count();
        prop_assert_eq!(matching, 1);
    }

    #[test]
    fn owning_hides_release_from_every_wishlist_view(idx in any::<u8>(), sort in 0usize..6) {
        let sorts = [
            WishlistSort::Priority,
            WishlistSort::DateAdded,
            WishlistSort::TargetDate,
            WishlistSort::Alphabetical,
            WishlistSort::EstimatedPrice,
            WishlistSort::Series,
        ];
        let catalog = Arc::new(Catalog::builtin());
        let ids = release_ids(&catalog);
        let id = pick(&ids, idx).to_string();
        let mut shelf = Shelf::in_memory(catalog);

        shelf.add_many_to_wishlist(ids.iter().take(10).cloned(), Priority::Medium);
        shelf.add_to_wishlist(WishlistDraft::new(id.clone()));
        shelf.toggle_owned(&id);

        let query = WishlistQuery { sort: sorts[sort], ..WishlistQuery::default() };
        prop_assert!(shelf.wishlist_view(&query).iter().all(|i| i.release_id != id));
    }

    #[test]
    fn sorted_views_are_deterministic(owned in prop::collection::vec(any::<u8>(), 0..30), sort in 0usize..6) {
        let keys = [
            SortKey::Alphabetical,
            SortKey::Series,
            SortKey::Color,
            SortKey::Recent,
            SortKey::OwnedFirst,
            SortKey::FavoritesFirst,
        ];
        let catalog = Arc::new(Catalog::builtin());
        let ids = release_ids(&catalog);
        let mut shelf = Shelf::in_memory(Arc::clone(&catalog));
        for idx in &owned {
            shelf.toggle_owned(pick(&ids, *idx));
            shelf.add_to_wishlist(WishlistDraft::new(pick(&ids, idx.wrapping_add(1))));
        }

        let query = SearchQuery { sort: keys[sort], filter: InclusionFilter::All, ..SearchQuery::default() };
        let first: Vec<String> = shelf.search(&query).iter().map(|r| r.id.clone()).collect();
        let second: Vec<String> = shelf.search(&query).iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), catalog.total_releases());

        let alpha = WishlistQuery { sort: WishlistSort::Alphabetical, ..WishlistQuery::default() };
        let names: Vec<String> = shelf
            .wishlist_view(&alpha)
            .iter()
            .filter_map(|i| catalog.release(&i.release_id).map(|r| r.name.clone()))
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);

        let by_series = WishlistQuery { sort: WishlistSort::Series, ..WishlistQuery::default() };
        let view = shelf.wishlist_view(&by_series);
        for pair in view.windows(2) {
            let (a, b) = (&pair[0].release_id, &pair[1].release_id);
            if catalog.series_name_of(a) == catalog.series_name_of(b) {
                let na = catalog.release(a).map(|r| r.name.as_str());
                let nb = catalog.release(b).map(|r| r.name.as_str());
                prop_assert!(na <= nb);
            }
        }
    }
}
