use super::*;

// =============================================================
// Decoding backend payloads
// =============================================================

#[test]
fn ad_list_decodes_with_missing_optional_fields() {
    let raw = r#"[{"id":1,"title":"Bike","price":100}]"#;
    let ads: Vec<Ad> = serde_json::from_str(raw).unwrap();
    assert_eq!(ads.len(), 1);
    assert_eq!(ads[0].title, "Bike");
    assert_eq!(ads[0].price, 100);
    assert!(!ads[0].is_sold);
    assert!(ads[0].images.is_empty());
    assert!(ads[0].owner.is_none());
    assert!(ads[0].distance.is_none());
}

#[test]
fn ad_decodes_owner_thumbnail_and_images() {
    let raw = serde_json::json!({
        "id": 7,
        "title": "Sofa",
        "price": 1500,
        "description": "Grey, three seats",
        "category": 2,
        "is_sold": true,
        "thumbnail": {"id": 3, "url": "/media/a.png", "description": null},
        "images": [{"id": 3, "url": "/media/a.png"}, {"id": 4, "url": "/media/b.png", "description": "Back"}],
        "owner": {"id": 9, "email": "kari@example.no", "first_name": "Kari", "last_name": "Nordmann", "phone_number": "+4712345678"},
        "distance": 12.5
    });
    let ad: Ad = serde_json::from_value(raw).unwrap();
    assert_eq!(ad.category, Some(2));
    assert!(ad.is_sold);
    assert_eq!(ad.thumbnail.as_ref().map(|t| t.url.as_str()), Some("/media/a.png"));
    assert_eq!(ad.images[1].description.as_deref(), Some("Back"));
    let owner = ad.owner.unwrap();
    assert_eq!(owner.full_name(), "Kari Nordmann");
    assert!(!owner.is_staff);
    assert_eq!(ad.distance, Some(12.5));
}

#[test]
fn ad_rejects_negative_price() {
    let raw = r#"{"id":1,"title":"Bike","price":-5}"#;
    assert!(serde_json::from_str::<Ad>(raw).is_err());
}

#[test]
fn user_full_name_trims_missing_parts() {
    let user = User { email: "a@b.no".to_owned(), first_name: "Ola".to_owned(), ..User::default() };
    assert_eq!(user.full_name(), "Ola");
}

// =============================================================
// Encoding request bodies
// =============================================================

#[test]
fn favorite_request_omits_missing_id() {
    let body = serde_json::to_value(FavoriteAd::new(4, 11)).unwrap();
    assert_eq!(body, serde_json::json!({ "user": 4, "favorite_ad": 11 }));
}

#[test]
fn ad_payload_only_sends_sold_flag_when_editing() {
    let create = AdPayload {
        title: "Bike".to_owned(),
        price: 100,
        description: "Red".to_owned(),
        category: None,
        is_sold: None,
    };
    let body = serde_json::to_value(&create).unwrap();
    assert!(body.get("is_sold").is_none());
    assert_eq!(body["category"], serde_json::Value::Null);

    let edit = AdPayload { is_sold: Some(true), ..create };
    assert_eq!(serde_json::to_value(&edit).unwrap()["is_sold"], serde_json::json!(true));
}

#[test]
fn profile_update_skips_absent_address() {
    let update = ProfileUpdate {
        email: "ola@example.no".to_owned(),
        first_name: "Ola".to_owned(),
        last_name: "Nordmann".to_owned(),
        phone_number: "+4712345678".to_owned(),
        password: "hunter22hunter".to_owned(),
        address: None,
    };
    let body = serde_json::to_value(&update).unwrap();
    assert!(body.get("address").is_none());
}

#[test]
fn user_envelope_decodes_register_response() {
    let raw = serde_json::json!({
        "user": {"id": 2, "email": "ola@example.no", "first_name": "Ola", "last_name": "Nordmann"},
        "message": "User created successfully!"
    });
    let envelope: UserEnvelope = serde_json::from_value(raw).unwrap();
    assert_eq!(envelope.user.id, Some(2));
    assert_eq!(envelope.message.as_deref(), Some("User created successfully!"));
}
