use leptos::prelude::*;

use crate::content::AboutContent;
use crate::media::is_renderable_url;

use super::common::{FallbackImage, GlassCard};

#[component]
pub fn AboutSection(about: AboutContent) -> impl IntoView {
    let portrait = is_renderable_url(&about.image_url).then(|| {
        view! {
            <div class="flex justify-center md:justify-end">
                <div class="relative">
                    <div class="w-80 h-96 rounded-2xl overflow-hidden shadow-2xl">
                        <FallbackImage
                            src=about.image_url.clone()
                            alt=about.name.clone()
                            class_name="w-full h-full object-cover"
                        />
                    </div>
                    <div class="absolute -top-4 -right-4 w-24 h-24 bg-gradient-to-br from-blue-400/30 to-purple-400/30 rounded-full blur-xl"></div>
                    <div class="absolute -bottom-4 -left-4 w-32 h-32 bg-gradient-to-br from-pink-400/30 to-orange-400/30 rounded-full blur-xl"></div>
                </div>
            </div>
        }
    });

    view! {
        <section class="min-h-screen flex items-center justify-center px-4 py-12">
            <div class="max-w-6xl mx-auto">
                <GlassCard class_name="p-8 md:p-12 animate-fade-in-up">
                    <div class="grid md:grid-cols-2 gap-12 items-center">
                        <div class="text-center md:text-left">
                            <h1 class="text-4xl md:text-6xl font-bold text-slate-800 mb-4">
                                {about.name}
                            </h1>
                            <h2 class="text-xl md:text-2xl text-slate-600 mb-6">
                                {about.title}
                            </h2>
                            <div
                                class="text-slate-700 text-lg leading-relaxed space-y-4"
                                inner_html=about.description
                            ></div>
                        </div>
                        {portrait}
                    </div>
                </GlassCard>
            </div>
        </section>
    }
}
