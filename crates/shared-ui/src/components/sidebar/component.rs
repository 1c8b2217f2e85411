use dioxus::prelude::*;

/// Whether the navigation drawer is open on narrow screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// Two-column shell: navigation on the left, content on the right.
#[component]
pub fn SidebarLayout(#[props(default = false)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-layout",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

#[component]
pub fn Sidebar(brand: String, #[props(default)] subtitle: String, children: Element) -> Element {
    let mut state = use_sidebar();
    let open = state().open;

    rsx! {
        if open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside { class: "sidebar", "data-state": if open { "open" } else { "closed" },
            div { class: "sidebar-brand",
                span { class: "sidebar-brand-name", "{brand}" }
                if !subtitle.is_empty() {
                    span { class: "sidebar-brand-subtitle", "{subtitle}" }
                }
            }
            nav { class: "sidebar-nav", {children} }
        }
    }
}

/// Labelled group of navigation entries.
#[component]
pub fn SidebarSection(#[props(default)] label: String, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-section",
            if !label.is_empty() {
                div { class: "sidebar-section-label", "{label}" }
            }
            ul { class: "sidebar-menu", {children} }
        }
    }
}

/// Navigation entry. Selecting it closes the drawer on narrow screens.
#[component]
pub fn SidebarItem(#[props(default = false)] active: bool, children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li {
            class: "sidebar-item",
            "data-active": if active { "true" } else { "false" },
            onclick: move |_| state.set(SidebarState { open: false }),
            {children}
        }
    }
}

/// Hamburger button that toggles the drawer.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Buka menu",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            {children}
        }
    }
}

/// Content column next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
