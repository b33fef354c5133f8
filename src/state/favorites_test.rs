use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

#[test]
fn status_reflects_membership() {
    let favorites = vec![FavoriteAd::new(1, 10), FavoriteAd::new(1, 12)];
    assert_eq!(FavoriteStatus::from_favorites(&favorites, 12), FavoriteStatus::Favorited);
    assert_eq!(FavoriteStatus::from_favorites(&favorites, 11), FavoriteStatus::NotFavorited);
    assert_eq!(FavoriteStatus::from_favorites(&[], 11), FavoriteStatus::NotFavorited);
}

#[test]
fn unknown_is_not_favorited() {
    assert!(!FavoriteStatus::default().is_favorited());
    assert!(FavoriteStatus::Favorited.is_favorited());
}

#[test]
fn add_calls_create_once_and_flips_to_favorited() {
    let calls = RefCell::new(Vec::new());
    let status = block_on(add_favorite(4, 11, |favorite| {
        calls.borrow_mut().push(favorite.clone());
        std::future::ready(Ok(favorite))
    }));

    assert_eq!(status, Ok(FavoriteStatus::Favorited));
    assert_eq!(calls.into_inner(), vec![FavoriteAd::new(4, 11)]);
}

#[test]
fn add_failure_is_returned_unchanged() {
    let err = ApiError::from_status(400, r#"{"non_field_errors":["already saved"]}"#);
    let expected = err.clone();
    let status = block_on(add_favorite(4, 11, move |_| std::future::ready(Err(err))));
    assert_eq!(status, Err(expected));
}

#[test]
fn remove_calls_delete_once_and_flips_back() {
    let calls = RefCell::new(0);
    let status = block_on(remove_favorite(4, 11, |favorite| {
        assert_eq!(favorite, FavoriteAd::new(4, 11));
        *calls.borrow_mut() += 1;
        std::future::ready(Ok(()))
    }));

    assert_eq!(status, Ok(FavoriteStatus::NotFavorited));
    assert_eq!(calls.into_inner(), 1);
}

#[test]
fn status_loads_from_the_viewers_list() {
    let everyone_called = RefCell::new(false);
    let status = block_on(load_status(
        4,
        11,
        |user| std::future::ready(Ok(vec![FavoriteAd::new(user, 11)])),
        || {
            *everyone_called.borrow_mut() = true;
            std::future::ready(Ok(Vec::new()))
        },
    ));

    assert_eq!(status, Ok(FavoriteStatus::Favorited));
    assert!(!everyone_called.into_inner());
}

#[test]
fn status_falls_back_to_full_list_filtered_by_viewer() {
    let all = vec![FavoriteAd::new(5, 11), FavoriteAd::new(4, 12)];
    let status = block_on(load_status(
        4,
        11,
        |_| std::future::ready(Err(ApiError::Transport("offline".to_owned()))),
        move || std::future::ready(Ok(all)),
    ));
    assert_eq!(status, Ok(FavoriteStatus::NotFavorited));

    let status = block_on(load_status(
        4,
        12,
        |_| std::future::ready(Err(ApiError::Transport("offline".to_owned()))),
        || std::future::ready(Ok(vec![FavoriteAd::new(4, 12)])),
    ));
    assert_eq!(status, Ok(FavoriteStatus::Favorited));
}
