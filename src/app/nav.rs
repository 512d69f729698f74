use leptos::prelude::*;

use super::icons::DownloadIcon;
use super::OUTLINE_BUTTON;
use crate::profile;
use crate::sections::{SectionId, SECTIONS};

#[component]
pub fn NavBar(active: ReadSignal<SectionId>) -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 w-full z-50 backdrop-blur-md bg-black/30 border-b border-purple-900/30">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <div class="text-xl font-bold animate-slide-right">
                    <span class="text-purple-400">{profile::BRAND_INITIAL}</span>
                    {profile::BRAND_REST}
                </div>
                <div class="hidden md:flex space-x-8 animate-slide-down">
                    {SECTIONS
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class=move || nav_link_class(active.get() == section)
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=profile::RESUME_PATH
                    download=profile::RESUME_FILE_NAME
                    class=format!("{OUTLINE_BUTTON} animate-slide-left")
                >
                    <DownloadIcon class="mr-2 h-4 w-4" />
                    "Resume"
                </a>
            </div>
        </nav>
    }
}

fn nav_link_class(is_active: bool) -> &'static str {
    if is_active {
        "text-sm tracking-wider transition-colors hover:text-purple-400 text-purple-400"
    } else {
        "text-sm tracking-wider transition-colors hover:text-purple-400 text-gray-400"
    }
}
