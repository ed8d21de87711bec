use leptos::{either::EitherOf3, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::content::MediaItem;
use crate::media::{platform_name, video_source, watch_link_label, VideoSource};
#[cfg(feature = "hydrate")]
use crate::playlist::PlaybackPrefs;
use crate::playlist::{Playlist, RepeatMode};
use crate::sections::SectionKind;

use super::common::{GlassCard, SectionHeading};
use super::data::GetVideoBatch;

fn shuffle_seed() -> u64 {
    chrono::Utc::now().timestamp_millis().unsigned_abs()
}

fn control_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-full bg-pink-500 text-white text-sm transition-colors"
    } else {
        "px-4 py-2 rounded-full bg-white/60 hover:bg-white/90 text-slate-700 text-sm transition-colors"
    }
}

#[component]
pub fn VideosSection(videos: Vec<MediaItem>, cursor: Option<usize>) -> impl IntoView {
    let mut initial = Playlist::new(videos);
    initial.next();
    let playlist = RwSignal::new(initial);
    let (cursor, set_cursor) = signal(cursor);
    let load_more = ServerAction::<GetVideoBatch>::new();

    #[cfg(feature = "hydrate")]
    {
        let (prefs, set_prefs, _) =
            use_local_storage::<PlaybackPrefs, JsonSerdeWasmCodec>("video_prefs");

        Effect::watch(
            || (),
            move |_, _, _| {
                let stored = prefs.get_untracked();
                playlist.update(|p| {
                    p.set_repeat(stored.repeat);
                    if stored.shuffle != p.shuffle() {
                        p.set_shuffle(stored.shuffle, shuffle_seed());
                    }
                });
            },
            true,
        );

        Effect::watch(
            move || playlist.with(Playlist::prefs),
            move |current, _, _| set_prefs.set(*current),
            false,
        );
    }

    Effect::new(move |_| {
        let Some(result) = load_more.value().get() else {
            return;
        };
        match result {
            Ok(batch) => {
                let added = playlist
                    .try_update(|p| p.extend(batch.items, shuffle_seed()))
                    .unwrap_or_default();
                log::debug!("Discovered {added} more videos");
                set_cursor.set(batch.next_offset);
            }
            Err(e) => {
                log::warn!("Couldn't discover more videos: {e}");
                set_cursor.set(None);
            }
        }
    });

    let current = Memo::new(move |_| playlist.with(|p| p.current().cloned()));
    let is_empty = move || playlist.with(Playlist::is_empty);

    let player = move || {
        current.get().map(|item| {
            let title = item
                .title
                .clone()
                .unwrap_or_else(|| "Без названия".to_string());
            match video_source(&item.url) {
                Some(VideoSource::File(src)) => {
                    let url = item.url.clone();
                    EitherOf3::A(view! {
                        <video
                            class="w-full h-full bg-black"
                            src=src
                            title=title
                            controls=true
                            autoplay=true
                            playsinline=true
                            prop:loop=move || playlist.with(|p| p.repeat() == RepeatMode::One)
                            on:ended=move |_| {
                                playlist.update(|p| {
                                    p.on_ended();
                                })
                            }
                            on:error=move |_| {
                                log::warn!("Video {url} failed to load, hiding it");
                                playlist.update(|p| {
                                    p.remove_broken(&url);
                                });
                            }
                        ></video>
                    })
                }
                Some(VideoSource::Embed(src)) => EitherOf3::B(view! {
                    <iframe
                        class="w-full h-full"
                        src=src
                        title=title
                        allow="autoplay; encrypted-media; fullscreen; picture-in-picture; screen-wake-lock;"
                        allowfullscreen=true
                    ></iframe>
                }),
                None => EitherOf3::C(view! {
                    <div class="w-full h-full flex items-center justify-center text-white">
                        "Видео недоступно"
                    </div>
                }),
            }
        })
    };

    let caption = move || {
        current.get().map(|item| {
            let platform = platform_name(&item.url);
            let link_text = watch_link_label(&item.url);
            let caption = (!item.caption.is_empty()).then(|| {
                view! { <p class="text-slate-600 mt-2">{item.caption.clone()}</p> }
            });
            view! {
                <div class="flex items-center justify-between mt-4">
                    <h3 class="text-lg font-semibold text-slate-800">
                        {item.title.unwrap_or_else(|| "Без названия".to_string())}
                    </h3>
                    <span class="px-3 py-1 rounded-full bg-white/60 text-slate-600 text-xs">
                        {platform}
                    </span>
                </div>
                {caption}
                <a
                    href=item.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block mt-2 text-sm text-pink-600 hover:text-pink-700 underline"
                >
                    {link_text}
                </a>
            }
        })
    };

    let gallery = move || {
        let current_url = playlist.with(|p| p.current_url().map(str::to_string));
        playlist
            .with(|p| p.items().to_vec())
            .into_iter()
            .map(|item| {
                let selected = current_url.as_deref() == Some(item.url.as_str());
                let url = item.url.clone();
                let thumb = match video_source(&item.url) {
                    Some(VideoSource::File(src)) => {
                        let broken_url = item.url.clone();
                        EitherOf3::A(view! {
                            <video
                                class="w-full h-full object-cover pointer-events-none"
                                src=src
                                preload="metadata"
                                muted=true
                                on:error=move |_| {
                                    playlist.update(|p| {
                                        p.remove_broken(&broken_url);
                                    });
                                }
                            ></video>
                        })
                    }
                    Some(VideoSource::Embed(_)) => EitherOf3::B(view! {
                        <div class="w-full h-full flex items-center justify-center bg-gradient-to-br from-slate-700 to-slate-900 text-white">
                            {platform_name(&item.url)}
                        </div>
                    }),
                    None => EitherOf3::C(()),
                };
                let label = item.title.unwrap_or_else(|| "Без названия".to_string());
                let card_class = if selected {
                    "group text-left rounded-xl overflow-hidden ring-2 ring-pink-500 bg-white/40"
                } else {
                    "group text-left rounded-xl overflow-hidden hover:ring-2 hover:ring-white/70 bg-white/20"
                };
                view! {
                    <button
                        class=card_class
                        on:click=move |_| {
                            playlist.update(|p| {
                                p.select(&url);
                            })
                        }
                    >
                        <div class="aspect-video bg-black">{thumb}</div>
                        <p class="px-3 py-2 text-sm text-slate-700 truncate">{label}</p>
                    </button>
                }
            })
            .collect_view()
    };

    let more_button = move || {
        cursor.get().map(|offset| {
            view! {
                <button
                    class="px-6 py-3 rounded-full bg-white/60 hover:bg-white/90 text-slate-700 disabled:opacity-50"
                    disabled=move || load_more.pending().get()
                    on:click=move |_| {
                        load_more.dispatch(GetVideoBatch { offset });
                    }
                >
                    {move || {
                        if load_more.pending().get() { "Ищем видео..." } else { "Показать ещё" }
                    }}
                </button>
            }
        })
    };

    view! {
        <section class="min-h-screen flex items-center justify-center px-4 py-12">
            <div class="max-w-6xl mx-auto w-full">
                <SectionHeading
                    title=SectionKind::Videos.title()
                    subtitle="Эфиры, репортажи и проекты"
                />
                <Show
                    when=move || !is_empty()
                    fallback=|| {
                        view! {
                            <GlassCard class_name="p-12 text-center" hover=false>
                                <p class="text-slate-600 text-lg">"Видео скоро появятся"</p>
                            </GlassCard>
                        }
                    }
                >
                    <GlassCard class_name="p-6 md:p-8 mb-8" hover=false>
                        <div class="aspect-video rounded-xl overflow-hidden bg-black">{player}</div>
                        {caption}
                        <div class="flex flex-wrap items-center justify-center gap-3 mt-6">
                            <button
                                class=control_class(false)
                                aria-label="Предыдущее видео"
                                on:click=move |_| {
                                    playlist.update(|p| {
                                        p.prev();
                                    })
                                }
                            >
                                "⏮"
                            </button>
                            <button
                                class=control_class(false)
                                aria-label="Следующее видео"
                                on:click=move |_| {
                                    playlist.update(|p| {
                                        p.next();
                                    })
                                }
                            >
                                "⏭"
                            </button>
                            <button
                                class=move || control_class(playlist.with(Playlist::shuffle))
                                aria-pressed=move || playlist.with(Playlist::shuffle).to_string()
                                on:click=move |_| {
                                    playlist.update(|p| {
                                        let on = !p.shuffle();
                                        p.set_shuffle(on, shuffle_seed());
                                    })
                                }
                            >
                                "Перемешать"
                            </button>
                            <button
                                class=move || {
                                    control_class(playlist.with(|p| p.repeat() != RepeatMode::Off))
                                }
                                on:click=move |_| playlist.update(Playlist::cycle_repeat)
                            >
                                {move || playlist.with(|p| p.repeat().label())}
                            </button>
                        </div>
                    </GlassCard>
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-4">{gallery}</div>
                </Show>
                <div class="flex justify-center mt-8">{more_button}</div>
            </div>
        </section>
    }
}
