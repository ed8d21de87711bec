use leptos::{html, prelude::*};
use leptos_use::{use_scroll, use_window_size, UseScrollReturn, UseWindowSizeReturn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::sections::{active_section_index, SectionKind};

fn scroll_to_section(kind: SectionKind) {
    let Some(el) = document().get_element_by_id(kind.anchor()) else {
        log::warn!("No element for section '{}'", kind.anchor());
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Dot list on the right edge; the dot of the section in view is enlarged.
/// `scroller` is the full-height element the sections scroll in.
#[component]
pub fn Navigation(sections: Vec<SectionKind>, scroller: NodeRef<html::Div>) -> impl IntoView {
    let UseScrollReturn { y: scroll_y, .. } = use_scroll(scroller);
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let count = sections.len();
    let active = Memo::new(move |_| active_section_index(scroll_y.get(), height.get(), count));

    view! {
        <nav class="fixed right-6 top-1/2 -translate-y-1/2 z-50 p-4" aria-label="Разделы">
            <div class="flex flex-col items-end space-y-3">
                {sections
                    .into_iter()
                    .enumerate()
                    .map(|(i, kind)| {
                        let is_active = move || active.get() == i;
                        view! {
                            <div class="group flex items-center space-x-3">
                                <span class=move || {
                                    format!(
                                        "text-slate-700 text-sm whitespace-nowrap opacity-0 group-hover:opacity-100 transition-opacity duration-200 hidden md:block {}",
                                        if is_active() { "font-bold text-slate-800" } else { "" },
                                    )
                                }>{kind.title()}</span>
                                <button
                                    class=move || {
                                        if is_active() {
                                            "w-3 h-3 rounded-full transition-all duration-200 bg-slate-600 scale-125"
                                        } else {
                                            "w-3 h-3 rounded-full transition-all duration-200 bg-slate-300 hover:bg-slate-400 hover:scale-110"
                                        }
                                    }
                                    aria-label=format!("Перейти: {}", kind.title())
                                    on:click=move |_| scroll_to_section(kind)
                                ></button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
