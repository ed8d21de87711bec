use leptos::{html, prelude::*};

use crate::content::MediaItem;

use super::common::{GlassCard, SectionHeading};

#[component]
pub fn AudioSection(tracks: Vec<MediaItem>) -> impl IntoView {
    // id of the clip currently playing; starting one pauses the rest
    let playing = RwSignal::new(None::<String>);

    view! {
        <section class="min-h-screen flex items-center justify-center px-4 py-12">
            <div class="max-w-4xl mx-auto w-full">
                <SectionHeading title="Аудио" subtitle="Голос в эфире" />
                <div class="grid gap-4">
                    {tracks
                        .into_iter()
                        .map(|track| view! { <AudioCard track playing /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AudioCard(track: MediaItem, playing: RwSignal<Option<String>>) -> impl IntoView {
    let audio_ref = NodeRef::<html::Audio>::new();
    let id = track.id.clone();
    let is_playing = Signal::derive({
        let id = id.clone();
        move || playing.with(|p| p.as_ref() == Some(&id))
    });

    Effect::new(move |_| {
        if !is_playing.get() {
            if let Some(el) = audio_ref.get() {
                if let Err(e) = el.pause() {
                    log::warn!("Couldn't pause audio: {e:?}");
                }
            }
        }
    });

    let on_toggle = {
        let id = id.clone();
        move |_| {
            let Some(el) = audio_ref.get_untracked() else {
                return;
            };
            if is_playing.get_untracked() {
                playing.set(None);
                return;
            }
            match el.play() {
                Ok(_) => playing.set(Some(id.clone())),
                Err(e) => log::warn!("Couldn't play {id}: {e:?}"),
            }
        }
    };

    let on_ended = move |_| {
        if playing.with_untracked(|p| p.as_ref() == Some(&id)) {
            playing.set(None);
        }
    };

    let title = track
        .title
        .clone()
        .unwrap_or_else(|| "Без названия".to_string());

    view! {
        <GlassCard class_name="p-6">
            <div class="flex items-center space-x-4">
                <button
                    class="w-12 h-12 shrink-0 rounded-full bg-pink-500 hover:bg-pink-600 text-white text-xl"
                    aria-label=move || if is_playing.get() { "Пауза" } else { "Слушать" }
                    on:click=on_toggle
                >
                    {move || if is_playing.get() { "❚❚" } else { "▶" }}
                </button>
                <div class="min-w-0">
                    <h3 class="text-lg font-semibold text-slate-800 truncate">{title}</h3>
                    {(!track.caption.is_empty())
                        .then(|| {
                            view! { <p class="text-slate-600 text-sm">{track.caption.clone()}</p> }
                        })}
                </div>
            </div>
            <audio node_ref=audio_ref src=track.url preload="metadata" on:ended=on_ended></audio>
        </GlassCard>
    }
}
