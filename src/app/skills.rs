use leptos::prelude::*;

use crate::content::SkillsContent;
use crate::media::{is_renderable_url, PLACEHOLDER_IMAGE};

use super::common::{FallbackImage, GlassCard};

#[component]
pub fn SkillsSection(skills: SkillsContent) -> impl IntoView {
    let image = if is_renderable_url(&skills.image_url) {
        skills.image_url.clone()
    } else {
        PLACEHOLDER_IMAGE.to_string()
    };
    let alt = skills
        .name
        .clone()
        .unwrap_or_else(|| "Что я умею".to_string());

    view! {
        <section class="min-h-screen flex items-center justify-center px-4 py-12">
            <div class="max-w-6xl mx-auto">
                <GlassCard class_name="p-8 md:p-12 animate-fade-in-up">
                    <div class="grid md:grid-cols-2 gap-12 items-center">
                        <div class="flex justify-center md:justify-start order-2 md:order-1">
                            <div class="w-80 h-96 rounded-2xl overflow-hidden shadow-2xl">
                                <FallbackImage
                                    src=image
                                    alt=alt
                                    class_name="w-full h-full object-cover"
                                />
                            </div>
                        </div>
                        <div class="text-center md:text-left order-1 md:order-2">
                            <h2 class="text-3xl md:text-4xl font-bold text-slate-800 mb-6">
                                "ЧТО Я УМЕЮ"
                            </h2>
                            {skills
                                .title
                                .map(|title| {
                                    view! {
                                        <h3 class="text-xl text-slate-600 mb-4">{title}</h3>
                                    }
                                })}
                            <div
                                class="text-slate-700 text-lg leading-relaxed space-y-4"
                                inner_html=skills.description
                            ></div>
                        </div>
                    </div>
                </GlassCard>
            </div>
        </section>
    }
}
