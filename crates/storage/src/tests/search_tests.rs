use super::{create_test_storage, name, number};

fn seed(storage: &crate::SqliteStorage) {
    for (n, num) in [("john smith", "1"), ("johanna", "2"), ("bob", "3"), ("50%_off", "4")] {
        storage.insert_contact(&name(n), &number(num)).unwrap();
    }
}

#[test]
fn test_search_substring_case_insensitive() {
    let (storage, _temp_dir) = create_test_storage();
    seed(&storage);

    let results = storage.search_contacts("  JO ").unwrap();
    let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["john smith", "johanna"]);
}

#[test]
fn test_search_empty_keyword_returns_all_in_id_order() {
    let (storage, _temp_dir) = create_test_storage();
    seed(&storage);

    let results = storage.search_contacts("").unwrap();
    assert_eq!(results.len(), 4);
    assert!(results.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn test_search_no_match_is_empty() {
    let (storage, _temp_dir) = create_test_storage();
    seed(&storage);

    assert!(storage.search_contacts("zzz").unwrap().is_empty());
}

#[test]
fn test_search_wildcards_match_literally() {
    let (storage, _temp_dir) = create_test_storage();
    seed(&storage);

    let percent = storage.search_contacts("%").unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].name.as_str(), "50%_off");

    let underscore = storage.search_contacts("_").unwrap();
    assert_eq!(underscore.len(), 1);

    assert!(storage.search_contacts("j_hn").unwrap().is_empty());
}

#[test]
fn test_search_quote_is_plain_text() {
    let (storage, _temp_dir) = create_test_storage();
    storage.insert_contact(&name("o'neil"), &number("7")).unwrap();

    let results = storage.search_contacts("o'n").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].view().name, "O'Neil");

    assert!(storage.search_contacts("' OR '1'='1").unwrap().is_empty());
}

#[test]
fn test_search_view_example() {
    let (storage, _temp_dir) = create_test_storage();
    storage.insert_contact(&name("  John  "), &number("5551234")).unwrap();

    let views: Vec<_> = storage.search_contacts("jo").unwrap().iter().map(|c| c.view()).collect();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, 1);
    assert_eq!(views[0].name, "John");
    assert_eq!(views[0].number, "5551234");
}
