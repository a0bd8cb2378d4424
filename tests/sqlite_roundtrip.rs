use std::sync::Arc;

use chrono::{Duration, Utc};
use tempfile::TempDir;

use toyshelf::{
    catalog::Catalog,
    config::ShelfConfig,
    core::{OwnershipLookup, gallery::GalleryDraft, wishlist::WishlistDraft},
    persist::{
        KvSink, KvSource,
        record::{self, FAVORITES_KEY, OWNED_KEY, WISHLIST_KEY},
        sqlite::SqliteKvStore,
    },
    shelf::Shelf,
    types::Priority,
};

fn open_shelf(path: &std::path::Path, config: ShelfConfig) -> Shelf {
    let source = SqliteKvStore::open(path).expect("open source");
    let sink = SqliteKvStore::open(path).expect("open sink");
    Shelf::open(Arc::new(Catalog::builtin()), &source, Box::new(sink), config)
}

#[test]
fn reopen_restores_every_record() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("shelf.db");

    let wish_id = {
        let mut shelf = open_shelf(&db_path, ShelfConfig::default());
        shelf.toggle_owned("lemon");
        shelf.toggle_favorite("lemon");
        shelf.set_photo("lemon", vec![0xde, 0xad]);
        let draft = WishlistDraft {
            priority: Priority::MustHave,
            notes: Some("gift".to_string()),
            ..WishlistDraft::new("hope")
        };
        shelf.add_to_wishlist(draft).expect("added")
    };

    let shelf = open_shelf(&db_path, ShelfConfig::default());
    assert!(shelf.collection().is_owned("lemon"));
    assert!(shelf.collection().is_favorite("lemon"));
    assert_eq!(shelf.collection().photo("lemon"), Some(&[0xde, 0xad][..]));
    let item = shelf.wishlist().get_by_id(wish_id).expect("item");
    assert_eq!(item.priority, Priority::MustHave);
    assert_eq!(item.notes.as_deref(), Some("gift"));
}

#[test]
fn deferred_writes_need_persist_all() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("shelf.db");
    let config = ShelfConfig {
        persist_eagerly: false,
        ..ShelfConfig::default()
    };

    {
        let mut shelf = open_shelf(&db_path, config.clone());
        shelf.toggle_owned("kiwi");
    }
    assert!(!open_shelf(&db_path, config.clone()).collection().is_owned("kiwi"));

    {
        let mut shelf = open_shelf(&db_path, config.clone());
        shelf.toggle_owned("kiwi");
        shelf.persist_all().expect("persist");
    }
    assert!(open_shelf(&db_path, config).collection().is_owned("kiwi"));
}

#[test]
fn legacy_bare_records_load() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("shelf.db");
    {
        let mut raw = SqliteKvStore::open(&db_path).expect("open");
        raw.save(OWNED_KEY, br#"["pear","grape"]"#).expect("save");
        raw.save(FAVORITES_KEY, br#"["pear"]"#).expect("save");
    }

    let shelf = open_shelf(&db_path, ShelfConfig::default());
    assert_eq!(shelf.collection().owned_ids(), vec!["grape", "pear"]);
    assert!(shelf.collection().is_favorite("pear"));
}

#[test]
fn corrupt_record_loads_empty_and_others_survive() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("shelf.db");
    {
        let mut raw = SqliteKvStore::open(&db_path).expect("open");
        raw.save(OWNED_KEY, b"{not json").expect("save");
        let favorites = record::encode(&["cherry"]).expect("encode");
        raw.save(FAVORITES_KEY, &favorites).expect("save");
    }

    let shelf = open_shelf(&db_path, ShelfConfig::default());
    assert_eq!(shelf.collection().owned_count(), 0);
    assert!(shelf.collection().is_favorite("cherry"));
}

#[test]
fn open_prunes_owned_wishlist_items() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("shelf.db");
    {
        let mut shelf = open_shelf(&db_path, ShelfConfig::default());
        shelf.add_to_wishlist(WishlistDraft::new("peach")).expect("added");
        shelf.add_to_wishlist(WishlistDraft::new("cherry")).expect("added");
    }
    {
        // Owned set written without the matching wishlist update.
        let mut raw = SqliteKvStore::open(&db_path).expect("open");
        let owned = record::encode(&["peach"]).expect("encode");
        raw.save(OWNED_KEY, &owned).expect("save");
    }

    let shelf = open_shelf(&db_path, ShelfConfig::default());
    assert!(!shelf.wishlist().is_in_wishlist("peach"));
    assert!(shelf.wishlist().is_in_wishlist("cherry"));

    let raw = SqliteKvStore::open(&db_path).expect("open");
    let bytes = raw.load(WISHLIST_KEY).expect("load").expect("present");
    let stored: Vec<serde_json::Value> = record::decode(&bytes).expect("decode");
    assert_eq!(stored.len(), 1);
}

#[test]
fn store_keeps_key_metadata() {
    let mut store = SqliteKvStore::open_in_memory().expect("open");
    store.save("a", b"1").expect("save");
    store.save("b", b"2").expect("save");
    store.save("a", b"3").expect("save");

    assert_eq!(store.keys().expect("keys"), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(store.load("a").expect("load"), Some(b"3".to_vec()));
    assert!(store.updated_at_ms("a").expect("ts").is_some());
    assert!(store.remove("a").expect("remove"));
    assert_eq!(store.load("a").expect("load"), None);
}

#[test]
fn gallery_survives_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("shelf.db");
    let start = Utc::now();

    let (first, second) = {
        let mut shelf = open_shelf(&db_path, ShelfConfig::default());
        let first = shelf.add_gallery_photo(GalleryDraft {
            caption: Some("unboxing".to_string()),
            added_at: start,
            ..GalleryDraft::new("kiwi", vec![1, 2, 3])
        });
        let second = shelf.add_gallery_photo(GalleryDraft {
            added_at: start + Duration::minutes(5),
            ..GalleryDraft::new("kiwi", vec![4, 5])
        });
        assert!(shelf.set_main_gallery_photo(second));
        assert!(shelf.update_gallery_caption(second, "on the desk"));
        (first, second)
    };

    let mut shelf = open_shelf(&db_path, ShelfConfig::default());
    let ids: Vec<_> = shelf.gallery().photos_for("kiwi").iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second, first]);
    let main = shelf.gallery().main_photo("kiwi").expect("main");
    assert_eq!(main.id, second);
    assert_eq!(main.caption.as_deref(), Some("on the desk"));
    assert_eq!(main.bytes, vec![4, 5]);
    assert_eq!(
        shelf.gallery().get(first).and_then(|p| p.caption.as_deref()),
        Some("unboxing")
    );

    assert!(shelf.delete_gallery_photo(second));
    drop(shelf);
    let shelf = open_shelf(&db_path, ShelfConfig::default());
    assert_eq!(shelf.gallery().main_photo("kiwi").map(|p| p.id), Some(first));
    assert_eq!(shelf.gallery().count(), 1);
}
