use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;
use hotelfix::{model::auth::Role, service::AppApi};

use crate::client::{
    components::{navbar::HotelfixTitle, NotificationBell},
    hooks::use_auth,
    router::Route,
};

/// Whether a role may open a page of the authenticated area
pub fn can_access(role: Role, route: &Route) -> bool {
    match route {
        Route::Dashboard {} | Route::Privacy {} => true,
        Route::TicketDetail { .. } => role.can_work_tickets(),
        Route::Technicians {} => role == Role::Admin,
        Route::Billing {} => role.can_manage_hotel(),
        Route::Hotels {} | Route::Plans {} | Route::Categories {} | Route::AuditLogs {} => {
            role.can_manage_platform()
        }
        _ => true,
    }
}

fn sidebar_links(role: Role) -> Vec<(Route, &'static str)> {
    let links = [
        (Route::Dashboard {}, "Dashboard"),
        (Route::Technicians {}, "Technicians"),
        (Route::Hotels {}, "Hotels"),
        (Route::Plans {}, "Plans"),
        (Route::Categories {}, "Categories"),
        (Route::Billing {}, "Billing"),
        (Route::AuditLogs {}, "Audit log"),
        (Route::Privacy {}, "Privacy"),
    ];

    links
        .into_iter()
        .filter(|(route, _)| can_access(role, route))
        .collect()
}

/// Layout of the authenticated area: sidebar, header with notifications, role guard
#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();
    let api = use_context::<AppApi>();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(move || {
        if !auth.is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    let Some(user) = auth.user() else {
        return rsx!();
    };

    let logout = move |_| {
        api.logout();
        auth.set(None);
        nav.push(Route::Home {});
    };

    rsx! {
        div { class: "min-h-screen flex",
            aside { class: "w-56 bg-base-200 p-4 flex flex-col gap-2",
                HotelfixTitle {}
                ul { class: "menu",
                    for (link, label) in sidebar_links(user.role) {
                        li {
                            Link {
                                class: if link == route { "active" } else { "" },
                                to: link.clone(),
                                "{label}"
                            }
                        }
                    }
                }
            }
            div { class: "flex-1 flex flex-col",
                header { class: "navbar bg-base-100 shadow-sm",
                    div { class: "navbar-start",
                        p { class: "font-semibold", "{user.full_name}" }
                        span { class: "badge badge-ghost ml-2", "{user.role}" }
                    }
                    div { class: "navbar-end flex gap-2",
                        if user.role == Role::Admin {
                            NotificationBell { hotel_id: user.hotel_id }
                        }
                        button { class: "btn btn-ghost", onclick: logout,
                            Icon { width: 20, height: 20, icon: FaRightFromBracket }
                            "Log out"
                        }
                    }
                }
                main { class: "p-6",
                    if can_access(user.role, &route) {
                        Outlet::<Route> {}
                    } else {
                        div { class: "alert alert-warning",
                            "Your account does not have access to this page."
                        }
                    }
                }
            }
        }
    }
}
