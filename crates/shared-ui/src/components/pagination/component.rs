use dioxus::prelude::*;
use shared_types::{PageToken, PaginationMeta, DEFAULT_PAGE_DELTA};

/// Arrow buttons around the page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
}

impl PageNav {
    fn symbol(&self) -> &'static str {
        match self {
            PageNav::First => "«",
            PageNav::Previous => "‹",
            PageNav::Next => "›",
            PageNav::Last => "»",
        }
    }

    fn aria_label(&self) -> &'static str {
        match self {
            PageNav::First => "Halaman pertama",
            PageNav::Previous => "Halaman sebelumnya",
            PageNav::Next => "Halaman berikutnya",
            PageNav::Last => "Halaman terakhir",
        }
    }
}

/// One control of the pagination bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Nav {
        nav: PageNav,
        target: i64,
        enabled: bool,
    },
    Number {
        page: i64,
        current: bool,
    },
    Gap,
}

/// Controls for `meta`, or nothing when a single page (or an inconsistent
/// meta) leaves nothing to navigate.
pub fn page_items(meta: &PaginationMeta, delta: i64) -> Vec<PageItem> {
    if !meta.should_render() {
        return Vec::new();
    }
    let Ok(tokens) = meta.window(delta) else {
        return Vec::new();
    };
    let nav = meta.nav_controls();

    let mut items = vec![
        PageItem::Nav {
            nav: PageNav::First,
            target: 1,
            enabled: nav.first,
        },
        PageItem::Nav {
            nav: PageNav::Previous,
            target: meta.current_page - 1,
            enabled: nav.previous,
        },
    ];
    items.extend(tokens.into_iter().map(|token| match token {
        PageToken::Page(page) => PageItem::Number {
            page,
            current: page == meta.current_page,
        },
        PageToken::Ellipsis => PageItem::Gap,
    }));
    items.push(PageItem::Nav {
        nav: PageNav::Next,
        target: meta.current_page + 1,
        enabled: nav.next,
    });
    items.push(PageItem::Nav {
        nav: PageNav::Last,
        target: meta.last_page,
        enabled: nav.last,
    });
    items
}

/// Page-window pagination footer.
///
/// Emits the requested page number through `on_page`; buttons that would
/// leave `1..=last_page` are disabled rather than hidden.
#[component]
pub fn PaginationBar(
    meta: PaginationMeta,
    #[props(default = DEFAULT_PAGE_DELTA)] delta: i64,
    /// Disables every control, e.g. while a page is loading.
    #[props(default = false)]
    disabled: bool,
    on_page: EventHandler<i64>,
) -> Element {
    let items = page_items(&meta, delta);
    if items.is_empty() {
        return rsx! {};
    }
    let summary = meta.summary();
    let controls = items.into_iter().enumerate().map(|(index, item)| match item {
        PageItem::Nav {
            nav,
            target,
            enabled,
        } => rsx! {
            button {
                key: "nav-{index}",
                class: "pagination-item pagination-nav",
                r#type: "button",
                "aria-label": nav.aria_label(),
                disabled: disabled || !enabled,
                onclick: move |_| on_page.call(target),
                {nav.symbol()}
            }
        },
        PageItem::Number { page, current } => rsx! {
            button {
                key: "page-{page}",
                class: "pagination-item",
                r#type: "button",
                "data-page": "{page}",
                "aria-current": if current { "page" } else { "false" },
                disabled,
                onclick: move |_| {
                    if !current {
                        on_page.call(page);
                    }
                },
                "{page}"
            }
        },
        PageItem::Gap => rsx! {
            span { key: "gap-{index}", class: "pagination-gap", "…" }
        },
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Navigasi halaman",
            span { class: "pagination-summary", "{summary}" }
            div { class: "pagination-controls", {controls} }
        }
    }
}
