//! The logged-in user's profile (`/profile`, `/profile/:page`).

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::ad_list::AdList;
use crate::forms::address::AddAddressForm;
use crate::forms::change_password::ChangePasswordForm;
use crate::forms::edit_profile::EditProfileForm;
use crate::net::types::Ad;
use crate::state::session::use_session;

/// Profile sub-page selected by the `:page` segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Ads,
    Favorites,
    Edit,
    Password,
}

impl ProfileTab {
    pub const ALL: [Self; 4] = [Self::Ads, Self::Favorites, Self::Edit, Self::Password];

    /// Unknown or missing segments fall back to the ads tab.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("favorites") => Self::Favorites,
            Some("edit") => Self::Edit,
            Some("password") => Self::Password,
            _ => Self::Ads,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Ads => "ads",
            Self::Favorites => "favorites",
            Self::Edit => "edit",
            Self::Password => "password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ads => "My ads",
            Self::Favorites => "Favorites",
            Self::Edit => "Edit profile",
            Self::Password => "Password",
        }
    }

    pub fn href(self) -> String {
        format!("/profile/{}", self.slug())
    }
}

#[component]
fn OwnAds(favorites: bool) -> impl IntoView {
    let ads = RwSignal::new(Vec::<Ad>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = if favorites {
            crate::net::ad_api::list_my_favorite_ads().await
        } else {
            crate::net::ad_api::list_my_ads().await
        };
        loading.set(false);
        match result {
            Ok(list) => ads.set(list),
            Err(err) => {
                log::warn!("profile ad list failed: {err}");
                error.set(Some(err.user_message()));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    loading.set(false);

    let empty_text = if favorites { "You have no favorites yet." } else { "You have not posted any ads yet." };

    view! {
        {move || error.get().map(|msg| view! { <p class="page__error">{msg}</p> })}
        <AdList ads=ads loading=loading empty_text=empty_text/>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let tab = Memo::new(move |_| ProfileTab::from_param(params.read().get("page").as_deref()));

    let heading = move || session.user().map(|u| u.full_name()).unwrap_or_else(|| "Profile".to_owned());

    view! {
        <Title text="Profile | Sellpoint"/>
        <section class="page profile">
            <h1>{heading}</h1>
            {move || {
                session
                    .user()
                    .map(|user| {
                        view! {
                            <p class="profile__contact">
                                {user.email}
                                {user.phone_number.map(|phone| format!(" · {phone}"))}
                            </p>
                        }
                    })
            }}
            <nav class="profile__tabs">
                {ProfileTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <a class="profile__tab" class:profile__tab--active=move || tab.get() == t href=t.href()>
                                {t.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match tab.get() {
                ProfileTab::Ads => view! { <OwnAds favorites=false/> }.into_any(),
                ProfileTab::Favorites => view! { <OwnAds favorites=true/> }.into_any(),
                ProfileTab::Edit => match session.user() {
                    Some(user) => {
                        let missing_address = user.address.is_none();
                        view! {
                            <EditProfileForm user=user/>
                            {missing_address.then(|| view! { <AddAddressForm/> })}
                        }
                            .into_any()
                    }
                    None => view! { <p class="page__loading">"Loading..."</p> }.into_any(),
                },
                ProfileTab::Password => view! { <ChangePasswordForm/> }.into_any(),
            }}
        </section>
    }
}
