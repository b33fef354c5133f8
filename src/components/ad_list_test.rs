use super::*;

fn bike() -> Ad {
    serde_json::from_str(r#"{"id":1,"title":"Bike","price":100,"description":"Red","category":null,"is_sold":false}"#)
        .unwrap()
}

#[test]
fn single_ad_response_yields_single_card() {
    let cards = card_models(&[bike()], None);

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Bike");
    assert_eq!(cards[0].price, "100,-");
}

#[test]
fn cards_keep_response_order() {
    let mut lamp = bike();
    lamp.id = 2;
    lamp.title = "Lamp".to_owned();

    let titles: Vec<_> = card_models(&[bike(), lamp], None).into_iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Bike", "Lamp"]);
}

#[test]
fn empty_response_yields_no_cards() {
    assert!(card_models(&[], None).is_empty());
}
