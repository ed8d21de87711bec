use leptos::prelude::*;

use super::common::GlassCard;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 via-blue-50 to-purple-50 flex items-center justify-center">
            <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-blue-200/20 rounded-full blur-3xl"></div>
            <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-purple-200/20 rounded-full blur-3xl"></div>
            <div class="relative z-10 flex flex-col items-center space-y-4">
                <div class="w-16 h-16 border-4 border-blue-500 border-t-transparent rounded-full animate-spin"></div>
                <p class="text-slate-600 text-lg">"Загрузка портфолио..."</p>
            </div>
        </div>
    }
}

/// Shown only when neither the store nor the bundled content has a profile
/// or contacts.
#[component]
pub fn OfflineLanding() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 via-blue-50 to-purple-50 flex items-center justify-center">
            <div class="text-center max-w-lg mx-auto p-8">
                <h1 class="text-2xl font-bold text-slate-800 mb-4">"Добро пожаловать!"</h1>
                <p class="text-slate-600 mb-4">
                    "Сайт временно работает в автономном режиме. Загляните чуть позже."
                </p>
                <GlassCard class_name="p-6 text-left" hover=false>
                    <h2 class="font-bold text-lg mb-2">"Анна Гаврилова"</h2>
                    <p class="text-slate-700">"Телеведущая канала 78, лауреат ТЭФИ-Мультимедиа"</p>
                </GlassCard>
            </div>
        </div>
    }
}
