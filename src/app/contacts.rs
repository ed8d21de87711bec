use leptos::prelude::*;

use crate::content::{contacts_or_default, ContactIcon, ContactItem};

use super::common::{GlassCard, SectionHeading};

fn icon_class(icon: ContactIcon) -> &'static str {
    match icon {
        ContactIcon::Mail => "extra-email",
        ContactIcon::Instagram => "extra-instagram",
        ContactIcon::Telegram => "extra-telegram",
        ContactIcon::External => "extra-link",
    }
}

fn accent_class(icon: ContactIcon) -> &'static str {
    match icon {
        ContactIcon::Mail => "from-blue-400 to-blue-600",
        ContactIcon::Instagram => "from-pink-400 to-purple-600",
        ContactIcon::Telegram => "from-sky-400 to-sky-600",
        ContactIcon::External => "from-slate-400 to-slate-600",
    }
}

#[component]
pub fn ContactsSection(contacts: Vec<ContactItem>) -> impl IntoView {
    let contacts = contacts_or_default(&contacts);
    let mail = contacts
        .iter()
        .find(|c| c.url.starts_with("mailto:"))
        .map(|c| c.url.clone());

    let cards = contacts
        .into_iter()
        .map(|contact| {
            let icon = contact.icon_kind();
            let handle = contact.handle();
            let external = !contact.url.starts_with("mailto:");
            view! {
                <a
                    href=contact.url
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    class="block"
                >
                    <GlassCard class_name="p-6 h-full">
                        <div class="flex flex-col items-center text-center space-y-3">
                            <div class=format!(
                                "w-14 h-14 rounded-full bg-gradient-to-br {} flex items-center justify-center text-white text-2xl",
                                accent_class(icon),
                            )>
                                <i class=icon_class(icon)></i>
                            </div>
                            <h3 class="text-lg font-semibold text-slate-800">{contact.platform}</h3>
                            <p class="text-slate-600 text-sm break-all">{handle}</p>
                        </div>
                    </GlassCard>
                </a>
            }
        })
        .collect_view();

    view! {
        <section class="min-h-screen flex items-center justify-center px-4 py-12">
            <div class="max-w-5xl mx-auto w-full">
                <SectionHeading title="Контакты" subtitle="Открыта для новых проектов и эфиров" />
                <div class="grid md:grid-cols-3 gap-6 mb-12">{cards}</div>
                {mail
                    .map(|href| {
                        view! {
                            <div class="text-center">
                                <a
                                    href=href
                                    class="inline-block px-8 py-4 rounded-full bg-gradient-to-r from-pink-500 to-purple-600 text-white text-lg shadow-lg hover:shadow-xl transition-shadow"
                                >
                                    "Написать мне"
                                </a>
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}
