mod about;
mod audio;
mod common;
mod contacts;
pub mod data;
mod navigation;
mod photos;
mod skills;
mod status;
mod videos;

use leptos::{either::Either, html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PortfolioPayload;
use crate::fallback;
use crate::sections::{visible_sections, SectionKind};

use about::AboutSection;
use audio::AudioSection;
use contacts::ContactsSection;
use data::get_portfolio;
use navigation::Navigation;
use photos::PhotosSection;
use skills::SkillsSection;
use status::{LoadingSpinner, OfflineLanding};
use videos::VideosSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Poiret+One&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/presenter-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-poiret">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} · Портфолио") />
        <Router>
            <main>
                <Routes fallback=|| "Страница не найдена.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let portfolio = Resource::new(
        || (),
        |_| async move {
            match get_portfolio().await {
                Ok(payload) => payload,
                Err(e) => {
                    log::warn!("Couldn't reach the server, using bundled content: {e}");
                    fallback::payload()
                }
            }
        },
    );

    view! {
        <Transition fallback=|| view! { <LoadingSpinner /> }>
            {move || Suspend::new(async move {
                let payload = portfolio.await;
                if payload.data.is_offline() {
                    Either::Left(view! { <OfflineLanding /> })
                } else {
                    Either::Right(view! { <PortfolioSections payload /> })
                }
            })}
        </Transition>
    }
}

#[component]
fn PortfolioSections(payload: PortfolioPayload) -> impl IntoView {
    let PortfolioPayload {
        data, video_cursor, ..
    } = payload;
    let sections = visible_sections(&data);
    let title = data
        .about
        .as_ref()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "Портфолио".to_string());

    let blocks = sections
        .iter()
        .map(|&kind| {
            let body = match kind {
                SectionKind::About => data
                    .about
                    .clone()
                    .map(|about| view! { <AboutSection about /> }.into_any()),
                SectionKind::Skills => data
                    .skills
                    .clone()
                    .map(|skills| view! { <SkillsSection skills /> }.into_any()),
                SectionKind::Photos => {
                    Some(view! { <PhotosSection photos=data.photos.clone() /> }.into_any())
                }
                SectionKind::Videos => Some(
                    view! { <VideosSection videos=data.videos.clone() cursor=video_cursor /> }
                        .into_any(),
                ),
                SectionKind::Audio => {
                    Some(view! { <AudioSection tracks=data.audio.clone() /> }.into_any())
                }
                SectionKind::Contacts => Some(
                    view! { <ContactsSection contacts=data.contacts.clone() /> }.into_any(),
                ),
            };
            view! {
                <div
                    id=kind.anchor()
                    class="relative z-10 min-h-screen snap-start transition-all duration-500 ease-out"
                >
                    {body}
                </div>
            }
        })
        .collect_view();

    let show_nav = sections.len() > 1;
    // the page scrolls inside this container so sections can snap
    let scroller = NodeRef::<html::Div>::new();

    view! {
        <Title text=title />
        <div
            node_ref=scroller
            class="relative h-screen overflow-y-scroll overflow-x-hidden bg-gradient-to-br from-slate-50 via-blue-50 to-purple-50 snap-y snap-mandatory scroll-smooth"
        >
            <div class="fixed top-1/4 left-1/4 w-96 h-96 bg-blue-200/20 rounded-full blur-3xl pointer-events-none"></div>
            <div class="fixed bottom-1/4 right-1/4 w-96 h-96 bg-purple-200/20 rounded-full blur-3xl pointer-events-none"></div>
            <div class="fixed top-3/4 left-1/2 w-96 h-96 bg-pink-200/20 rounded-full blur-3xl pointer-events-none"></div>
            {show_nav.then(|| view! { <Navigation sections=sections.clone() scroller /> })}
            {blocks}
        </div>
    }
}
