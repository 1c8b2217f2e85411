use dioxus::prelude::*;

/// Pulsing placeholder for content that has not arrived yet.
///
/// One bar by default. With `lines > 1` the bars are stacked and the last
/// one is cut short, which reads as a paragraph still loading. `class` and
/// `style` size every bar.
#[component]
pub fn Skeleton(
    #[props(default = 1)] lines: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    if lines <= 1 {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div { "aria-hidden": "true", ..merged }
        };
    }

    let bars: Vec<Vec<Attribute>> = (0..lines)
        .map(|line| {
            let mut bar = merged.clone();
            if line + 1 == lines {
                bar.push(Attribute::new("data-last", "true", None, false));
            }
            bar
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "skeleton-stack", "aria-hidden": "true",
            for (line, bar) in bars.into_iter().enumerate() {
                div { key: "{line}", ..bar }
            }
        }
    }
}
