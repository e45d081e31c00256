//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::pages::admin_users::AdminUsersPage;
use crate::pages::create_profile::CreateProfilePage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::payment::{PaymentCancelPage, PaymentSuccessPage};
use crate::pages::plans::PlansPage;
use crate::pages::profile::ProfilePage;
use crate::pages::signup::SignupPage;
use crate::pages::verify_email::VerifyEmailPage;
use crate::state::auth::AuthSession;
use crate::state::profile::ProfileSlot;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Acts as the composition root: the auth session manager and the profile
/// probe cache are created once here and handed to pages and guards via
/// context — no ambient singletons.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthSession::new();
    let profile = RwSignal::new(ProfileSlot::default());
    provide_context(auth);
    provide_context(profile);

    // Session restore kicks off immediately; every guard waits on the
    // loading flag until it settles, so no protected route renders early.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move { auth.bootstrap().await });

    view! {
        <Stylesheet id="leptos" href="/pkg/gamepro.css"/>
        <Title text="GamePro"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                    <Route
                        path=StaticSegment("create-profile")
                        view=|| {
                            view! {
                                <Protected>
                                    <CreateProfilePage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <Protected requires_profile=true>
                                    <DashboardPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <Protected requires_profile=true>
                                    <ProfilePage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("saved")
                        view=|| {
                            view! {
                                <Protected requires_profile=true>
                                    <ProfilePage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("plans")
                        view=|| {
                            view! {
                                <Protected>
                                    <PlansPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| {
                            view! {
                                <Protected admin_only=true>
                                    <AdminUsersPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("payment"), StaticSegment("success"))
                        view=|| {
                            view! {
                                <Protected>
                                    <PaymentSuccessPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("payment"), StaticSegment("cancel"))
                        view=|| {
                            view! {
                                <Protected>
                                    <PaymentCancelPage/>
                                </Protected>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
