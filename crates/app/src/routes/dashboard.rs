use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBriefcase, LdCalendar, LdClock, LdFileText, LdPackage, LdScale, LdShield, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::{ModuleCard, PageHeader};

use super::Route;
use crate::Registry;

/// Registry modules shown as tiles, in sidebar order.
fn modules() -> Vec<(Route, &'static str)> {
    vec![
        (Route::PanggilanList {}, "Panggilan untuk pihak yang alamatnya tidak diketahui"),
        (Route::EcourtList {}, "Panggilan elektronik melalui e-Court"),
        (Route::ItsbatList {}, "Pengumuman permohonan itsbat nikah"),
        (Route::AgendaList {}, "Jadwal kegiatan pimpinan"),
        (Route::LhkpnList {}, "Laporan harta kekayaan dan SPT tahunan"),
        (Route::AsetBmnList {}, "Laporan Barang Milik Negara"),
        (Route::AnggaranList {}, "Realisasi belanja per bulan"),
        (Route::PaguList {}, "Pagu per DIPA dan kategori"),
        (Route::DipaPokList {}, "Dokumen DIPA dan POK"),
    ]
}

fn module_icon(route: &Route) -> Element {
    match route {
        Route::PanggilanList {} => rsx! { Icon::<LdBell> { icon: LdBell, width: 28, height: 28 } },
        Route::EcourtList {} => rsx! { Icon::<LdClock> { icon: LdClock, width: 28, height: 28 } },
        Route::ItsbatList {} => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 28, height: 28 } },
        Route::AgendaList {} => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 28, height: 28 } },
        Route::LhkpnList {} => rsx! { Icon::<LdShield> { icon: LdShield, width: 28, height: 28 } },
        Route::AsetBmnList {} => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 28, height: 28 } },
        Route::AnggaranList {} => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 28, height: 28 } },
        Route::PaguList {} => rsx! { Icon::<LdScale> { icon: LdScale, width: 28, height: 28 } },
        _ => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 28, height: 28 } },
    }
}

/// Landing page with one tile per registry module.
#[component]
pub fn Dashboard() -> Element {
    let registry = use_context::<Registry>();
    let nav = navigator();
    let base_url = registry.client.base_url().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            PageHeader {
                title: "Dashboard",
                description: "Terhubung ke {base_url}",
            }

            div { class: "module-grid",
                for (route, description) in modules() {
                    ModuleCard {
                        key: "{route}",
                        title: route.title().to_string(),
                        description: description.to_string(),
                        onclick: {
                            let target = route.clone();
                            move |_| {
                                nav.push(target.clone());
                            }
                        },
                        {module_icon(&route)}
                    }
                }
            }
        }
    }
}
