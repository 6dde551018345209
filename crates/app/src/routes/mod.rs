pub mod analytics;
pub mod board;
pub mod farmer;
pub mod login;
pub mod market;
pub mod ngo_profile;
pub mod not_found;
pub mod payment;
pub mod register;

use crate::session::use_session;
use client::session::{guard, Access, GuardOutcome};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdLayoutDashboard, LdPackage, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Button, ButtonVariant};

use analytics::Analytics;
use farmer::FarmerDashboard;
use login::Login;
use market::{BuyerMarket, NgoMarket};
use ngo_profile::NgoProfile;
use not_found::NotFound;
use payment::Payment;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:notice")]
    Login { notice: String },
    #[route("/register")]
    Register {},
    #[route("/")]
    Home {},
    #[layout(AppLayout)]
        #[layout(FarmerGuard)]
            #[route("/farmer")]
            FarmerDashboard {},
        #[end_layout]
        #[layout(BuyerGuard)]
            #[route("/buyer")]
            BuyerMarket {},
            #[route("/pay/:id")]
            Payment { id: i64 },
        #[end_layout]
        #[layout(NgoGuard)]
            #[route("/ngo")]
            NgoMarket {},
            #[route("/ngo/profile")]
            NgoProfile {},
        #[end_layout]
        #[layout(SignedInGuard)]
            #[route("/analytics")]
            Analytics {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Landing page for each role after login.
pub fn home_route(role: Role) -> Route {
    match role {
        Role::Farmer => Route::FarmerDashboard {},
        Role::Buyer => Route::BuyerMarket {},
        Role::Ngo => Route::NgoMarket {},
    }
}

/// `/` sends signed-in users home and everyone else to login.
#[component]
fn Home() -> Element {
    let session = use_session();
    if !session.is_restored() {
        return rsx! { GuardPending {} };
    }
    match session.session() {
        Some(s) => navigator().replace(home_route(s.role)),
        None => navigator().replace(Route::Login { notice: String::new() }),
    };
    rsx! { GuardPending {} }
}

/// Applies the session guard for `access` and renders the nested route
/// only when it passes.
#[component]
fn SessionGuard(access: Access) -> Element {
    let session = use_session();
    if !session.is_restored() {
        return rsx! { GuardPending {} };
    }

    let current = session.session();
    match guard(current.as_ref(), access) {
        GuardOutcome::Authorized(_) => rsx! { Outlet::<Route> {} },
        GuardOutcome::Redirect { notice } => {
            tracing::warn!(?access, %notice, "Guard redirected to login");
            navigator().replace(Route::Login { notice });
            rsx! {
                div { class: "guard-pending",
                    p { "Redirecting to login..." }
                }
            }
        }
    }
}

#[component]
fn GuardPending() -> Element {
    rsx! {
        div { class: "guard-pending",
            p { "Loading..." }
        }
    }
}

#[component]
fn FarmerGuard() -> Element {
    rsx! { SessionGuard { access: Access::Role(Role::Farmer) } }
}

#[component]
fn BuyerGuard() -> Element {
    rsx! { SessionGuard { access: Access::Role(Role::Buyer) } }
}

#[component]
fn NgoGuard() -> Element {
    rsx! { SessionGuard { access: Access::Role(Role::Ngo) } }
}

#[component]
fn SignedInGuard() -> Element {
    rsx! { SessionGuard { access: Access::AnyRole } }
}

/// Top bar with role navigation and logout, wrapped around every
/// signed-in page.
#[component]
fn AppLayout() -> Element {
    let mut session = use_session();
    let current = session.session();

    let logout = move |_: MouseEvent| {
        session.sign_out();
        navigator().push(Route::Login { notice: String::new() });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "app-shell",
            header { class: "app-navbar",
                div { class: "app-brand",
                    Icon::<LdPackage> { icon: LdPackage, width: 22, height: 22 }
                    span { "Harvest Hub" }
                }
                if let Some(s) = current {
                    nav { class: "app-nav",
                        Link {
                            to: home_route(s.role),
                            class: "app-nav-link",
                            active_class: "active",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                            "Dashboard"
                        }
                        Link {
                            to: Route::Analytics {},
                            class: "app-nav-link",
                            active_class: "active",
                            Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                            "Analytics"
                        }
                        if s.role == Role::Ngo {
                            Link {
                                to: Route::NgoProfile {},
                                class: "app-nav-link",
                                active_class: "active",
                                Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
                                "Profile"
                            }
                        }
                    }
                    div { class: "app-user",
                        span { class: "app-user-name", {s.username.clone()} }
                        span { class: "app-user-role", "(" {s.role.display_name()} ")" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: logout,
                            "Logout"
                        }
                    }
                }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
