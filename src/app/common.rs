use leptos::prelude::*;

use crate::media::PLACEHOLDER_IMAGE;

#[component]
pub fn GlassCard(
    #[prop(into, optional)] class_name: String,
    #[prop(default = true)] hover: bool,
    children: Children,
) -> impl IntoView {
    let hover_class = if hover {
        "hover:bg-white/25 hover:shadow-2xl hover:shadow-black/10 transition-all duration-300"
    } else {
        ""
    };
    view! {
        <div class=format!(
            "bg-white/20 backdrop-blur-md border border-white/30 rounded-2xl {hover_class} {class_name}",
        )>{children()}</div>
    }
}

/// An `<img>` that swaps itself for the placeholder when it fails to load.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class_name: String,
) -> impl IntoView {
    let (src, set_src) = signal(src);
    view! {
        <img
            src=src
            alt=alt
            class=class_name
            loading="lazy"
            on:error=move |_| {
                if src.get_untracked() != PLACEHOLDER_IMAGE {
                    set_src.set(PLACEHOLDER_IMAGE.to_string());
                }
            }
        />
    }
}

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12 animate-fade-in-up">
            <h2 class="text-3xl md:text-4xl font-bold text-slate-800 mb-4">{title}</h2>
            <p class="text-slate-600 text-lg">{subtitle}</p>
        </div>
    }
}
