use super::*;

#[test]
fn known_segments_select_their_tab() {
    assert_eq!(ProfileTab::from_param(Some("favorites")), ProfileTab::Favorites);
    assert_eq!(ProfileTab::from_param(Some("edit")), ProfileTab::Edit);
    assert_eq!(ProfileTab::from_param(Some("password")), ProfileTab::Password);
}

#[test]
fn missing_or_unknown_segment_shows_ads() {
    assert_eq!(ProfileTab::from_param(None), ProfileTab::Ads);
    assert_eq!(ProfileTab::from_param(Some("settings")), ProfileTab::Ads);
}

#[test]
fn every_tab_links_back_to_itself() {
    for tab in ProfileTab::ALL {
        let href = tab.href();
        let slug = href.trim_start_matches("/profile/");
        assert_eq!(ProfileTab::from_param(Some(slug)), tab);
    }
}
