use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::content::MediaItem;
use crate::sections::SectionKind;
use crate::slideshow::{SlidePosition, Slideshow, AUTOPLAY_INTERVAL_MS};

use super::common::{FallbackImage, GlassCard, SectionHeading};

fn slide_class(position: SlidePosition) -> &'static str {
    match position {
        SlidePosition::Center => {
            "relative z-20 w-full max-w-md h-[500px] rounded-2xl overflow-hidden shadow-2xl transition-all duration-500"
        }
        SlidePosition::Left | SlidePosition::Right => {
            "relative z-10 hidden md:block w-64 h-80 rounded-2xl overflow-hidden opacity-60 scale-90 cursor-pointer hover:opacity-80 transition-all duration-500"
        }
    }
}

#[component]
pub fn PhotosSection(photos: Vec<MediaItem>) -> impl IntoView {
    let count = photos.len();
    let photos = StoredValue::new(photos);
    let show = RwSignal::new(Slideshow::new(count));

    use_interval_fn(move || show.update(Slideshow::tick), AUTOPLAY_INTERVAL_MS);

    let single = move || show.with(|s| s.len() <= 1);

    let slides = move || {
        show.with(Slideshow::visible)
            .into_iter()
            .filter_map(|slide| {
                let photo = photos.with_value(|p| p.get(slide.index).cloned())?;
                let center = slide.position == SlidePosition::Center;
                Some(view! {
                    <div
                        class=slide_class(slide.position)
                        on:click=move |_| {
                            if !center {
                                show.update(|s| s.go_to(slide.index));
                            }
                        }
                    >
                        <FallbackImage
                            src=photo.url
                            alt=photo.caption.clone()
                            class_name="w-full h-full object-cover"
                        />
                        {(center && !photo.caption.is_empty())
                            .then(|| {
                                view! {
                                    <div class="absolute bottom-0 inset-x-0 p-4 bg-gradient-to-t from-black/60 to-transparent text-white text-center">
                                        {photo.caption}
                                    </div>
                                }
                            })}
                    </div>
                })
            })
            .collect_view()
    };

    let dots = (0..count)
        .map(|i| {
            view! {
                <button
                    class=move || {
                        if show.with(|s| s.current() == i) {
                            "w-8 h-3 rounded-full bg-pink-500 transition-all duration-300"
                        } else {
                            "w-3 h-3 rounded-full bg-slate-300 hover:bg-slate-400 transition-all duration-300"
                        }
                    }
                    aria-label=format!("Фото {}", i + 1)
                    on:click=move |_| show.update(|s| s.go_to(i))
                ></button>
            }
        })
        .collect_view();

    view! {
        <section class="min-h-screen flex items-center justify-center px-4 py-12">
            <div class="max-w-7xl mx-auto w-full">
                <SectionHeading
                    title=SectionKind::Photos.title()
                    subtitle="Моменты из эфиров и съёмок"
                />
                <GlassCard class_name="p-8 animate-scale-in" hover=false>
                    <div class="relative flex items-center justify-center mb-8 min-h-[500px]">
                        <button
                            class="absolute left-0 z-30 w-12 h-12 rounded-full bg-white/70 hover:bg-white shadow-lg text-2xl disabled:opacity-30"
                            aria-label="Предыдущее фото"
                            disabled=single
                            on:click=move |_| show.update(Slideshow::prev)
                        >
                            "‹"
                        </button>
                        <div class="flex items-center justify-center space-x-6 w-full max-w-5xl">
                            {slides}
                        </div>
                        <button
                            class="absolute right-0 z-30 w-12 h-12 rounded-full bg-white/70 hover:bg-white shadow-lg text-2xl disabled:opacity-30"
                            aria-label="Следующее фото"
                            disabled=single
                            on:click=move |_| show.update(Slideshow::next)
                        >
                            "›"
                        </button>
                    </div>
                    <div class="flex flex-col items-center space-y-4">
                        <div class="flex items-center space-x-4">
                            <button
                                class="px-4 py-2 rounded-full bg-white/60 hover:bg-white/90 text-slate-700 text-sm"
                                on:click=move |_| show.update(Slideshow::toggle_autoplay)
                            >
                                {move || {
                                    if show.with(Slideshow::autoplay) { "Пауза" } else { "Слайдшоу" }
                                }}
                            </button>
                            <span class="text-slate-600 text-sm">
                                {move || show.with(|s| format!("{} / {}", s.current() + 1, s.len()))}
                            </span>
                        </div>
                        {move || {
                            show.with(|s| s.autoplay() && s.len() > 1)
                                .then(|| {
                                    // keyed on the index so the bar restarts with each slide
                                    let current = show.with(Slideshow::current);
                                    view! {
                                        <div class="w-48 h-1 bg-slate-200 rounded-full overflow-hidden">
                                            <div
                                                data-slide=current.to_string()
                                                class="h-full bg-pink-500 animate-progress"
                                            ></div>
                                        </div>
                                    }
                                })
                        }}
                        <div class="flex items-center space-x-2">{dots}</div>
                    </div>
                </GlassCard>
            </div>
        </section>
    }
}
