//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation_bar::NavigationBar;
use crate::components::route_guard::ProtectedRoute;
use crate::config;
use crate::pages::{
    ad_view::AdViewPage, create_ad::CreateAdPage, edit_ad::EditAdPage, login::LoginPage, main_page::MainPage,
    not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage, register::SignupRedirect,
    visit_profile::VisitProfilePage,
};
use crate::state::session::{BrowserBackend, Session};

/// Root application component.
///
/// Owns the one [`Session`] for the app's lifetime and hands it down through
/// context; pages never construct their own.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(BrowserBackend);
    provide_context(session);
    session.init();

    let is_authenticated = Signal::derive(move || session.is_authenticated());
    let set_redirect_path = Callback::new(move |path: String| session.set_redirect_path(Some(path)));
    let login_path = config::current().login_path;

    view! {
        <Title text="Sellpoint"/>

        <Router>
            <NavigationBar/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=MainPage/>
                    <Route
                        path=(StaticSegment("ad"), StaticSegment("create"))
                        view=move || {
                            view! {
                                <ProtectedRoute
                                    is_authenticated=is_authenticated
                                    authentication_path=login_path
                                    set_redirect_path=set_redirect_path
                                >
                                    <CreateAdPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("ad"), ParamSegment("id"), StaticSegment("edit"))
                        view=move || {
                            view! {
                                <ProtectedRoute
                                    is_authenticated=is_authenticated
                                    authentication_path=login_path
                                    set_redirect_path=set_redirect_path
                                >
                                    <EditAdPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route path=(StaticSegment("ad"), ParamSegment("id")) view=AdViewPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("signup") view=SignupRedirect/>
                    <Route
                        path=StaticSegment("profile")
                        view=move || {
                            view! {
                                <ProtectedRoute
                                    is_authenticated=is_authenticated
                                    authentication_path=login_path
                                    set_redirect_path=set_redirect_path
                                >
                                    <ProfilePage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("profile"), ParamSegment("page"))
                        view=move || {
                            view! {
                                <ProtectedRoute
                                    is_authenticated=is_authenticated
                                    authentication_path=login_path
                                    set_redirect_path=set_redirect_path
                                >
                                    <ProfilePage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route path=(StaticSegment("visit-profile"), ParamSegment("id")) view=VisitProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
