use super::*;

#[test]
fn ad_endpoints_embed_ids() {
    assert_eq!(ad_endpoint(12), "ad/12/");
    assert_eq!(ad_image_upload_endpoint(12), "ad/create/image/12/");
    assert_eq!(ad_image_endpoint(5), "ad/image/5/");
}

#[test]
fn category_endpoints_embed_ids() {
    assert_eq!(category_endpoint(3), "category/3/");
    assert_eq!(ads_by_category_endpoint(3), "ad/category/3/");
}

#[test]
fn favorite_endpoints_embed_user_and_ad() {
    assert_eq!(favorites_by_user_endpoint(4), "ad/favorite/user/4/");
    assert_eq!(favorite_delete_endpoint(4, 11), "favorite/delete/4/11/");
}

#[cfg(not(feature = "csr"))]
#[test]
fn create_favorite_surfaces_transport_error_unchanged() {
    let result = futures::executor::block_on(create_favorite(FavoriteAd::new(1, 2)));
    assert_eq!(result, Err(ApiError::Unavailable));
}
