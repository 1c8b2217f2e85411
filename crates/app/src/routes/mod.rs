pub mod agenda;
pub mod anggaran;
pub mod aset_bmn;
pub mod cells;
pub mod dashboard;
pub mod dipapok;
pub mod ecourt;
pub mod filters;
pub mod itsbat;
pub mod lhkpn;
pub mod not_found;
pub mod pagu;
pub mod panggilan;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBriefcase, LdCalendar, LdClock, LdFileText, LdLayoutDashboard, LdMenu, LdPackage,
    LdScale, LdShield, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::{Sidebar, SidebarInset, SidebarItem, SidebarLayout, SidebarSection, SidebarTrigger};

use agenda::AgendaList;
use anggaran::AnggaranList;
use aset_bmn::AsetBmnList;
use dashboard::Dashboard;
use dipapok::DipaPokList;
use ecourt::EcourtList;
use itsbat::ItsbatList;
use lhkpn::LhkpnList;
use not_found::NotFound;
use pagu::PaguList;
use panggilan::PanggilanList;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/panggilan")]
    PanggilanList {},
    #[route("/panggilan-ecourt")]
    EcourtList {},
    #[route("/itsbat")]
    ItsbatList {},
    #[route("/agenda")]
    AgendaList {},
    #[route("/lhkpn")]
    LhkpnList {},
    #[route("/anggaran")]
    AnggaranList {},
    #[route("/pagu")]
    PaguList {},
    #[route("/dipapok")]
    DipaPokList {},
    #[route("/aset-bmn")]
    AsetBmnList {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Heading shown in the top bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "Dashboard",
            Route::PanggilanList {} => "Panggilan Ghaib",
            Route::EcourtList {} => "Panggilan e-Court",
            Route::ItsbatList {} => "Itsbat Nikah",
            Route::AgendaList {} => "Agenda Pimpinan",
            Route::LhkpnList {} => "LHKPN & SPT",
            Route::AnggaranList {} => "Realisasi Anggaran",
            Route::PaguList {} => "Pagu Anggaran",
            Route::DipaPokList {} => "DIPA & POK",
            Route::AsetBmnList {} => "Aset BMN",
            Route::NotFound { .. } => "Tidak Ditemukan",
        }
    }
}

#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let page_title = route.title();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarLayout { default_open: false,
            Sidebar { brand: "Registry Admin", subtitle: "Pengadilan Agama",
                SidebarSection {
                    SidebarItem { active: matches!(route, Route::Dashboard {}),
                        Link { to: Route::Dashboard {},
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                            "Dashboard"
                        }
                    }
                }

                SidebarSection { label: "Kepaniteraan",
                    SidebarItem { active: matches!(route, Route::PanggilanList {}),
                        Link { to: Route::PanggilanList {},
                            Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                            "Panggilan Ghaib"
                        }
                    }
                    SidebarItem { active: matches!(route, Route::EcourtList {}),
                        Link { to: Route::EcourtList {},
                            Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                            "Panggilan e-Court"
                        }
                    }
                    SidebarItem { active: matches!(route, Route::ItsbatList {}),
                        Link { to: Route::ItsbatList {},
                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                            "Itsbat Nikah"
                        }
                    }
                }

                SidebarSection { label: "Kesekretariatan",
                    SidebarItem { active: matches!(route, Route::AgendaList {}),
                        Link { to: Route::AgendaList {},
                            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                            "Agenda Pimpinan"
                        }
                    }
                    SidebarItem { active: matches!(route, Route::LhkpnList {}),
                        Link { to: Route::LhkpnList {},
                            Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                            "LHKPN & SPT"
                        }
                    }
                    SidebarItem { active: matches!(route, Route::AsetBmnList {}),
                        Link { to: Route::AsetBmnList {},
                            Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                            "Aset BMN"
                        }
                    }
                }

                SidebarSection { label: "Anggaran",
                    SidebarItem { active: matches!(route, Route::AnggaranList {}),
                        Link { to: Route::AnggaranList {},
                            Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                            "Realisasi Anggaran"
                        }
                    }
                    SidebarItem { active: matches!(route, Route::PaguList {}),
                        Link { to: Route::PaguList {},
                            Icon::<LdScale> { icon: LdScale, width: 18, height: 18 }
                            "Pagu Anggaran"
                        }
                    }
                    SidebarItem { active: matches!(route, Route::DipaPokList {}),
                        Link { to: Route::DipaPokList {},
                            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                            "DIPA & POK"
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    span { class: "topbar-title", "{page_title}" }
                }
                div { class: "main-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
