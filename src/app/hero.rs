use leptos::prelude::*;

use super::icons::{ArrowDownIcon, ChevronRightIcon};
use super::{GRADIENT_BUTTON, OUTLINE_BUTTON};
use crate::profile;
use crate::sections::SectionId;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=SectionId::Home.id() class="min-h-screen flex items-center relative pt-20">
            <div class="container mx-auto px-4 grid md:grid-cols-2 gap-12 items-center">
                <div class="order-2 md:order-1 animate-fade-up">
                    <h1 class="text-4xl md:text-6xl font-bold mb-4">
                        <span class="block">"Hi, I'm"</span>
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-purple-400 to-pink-500">
                            {profile::NAME}
                        </span>
                    </h1>
                    <h2 class="text-xl md:text-2xl text-gray-400 mb-6">{profile::ROLE}</h2>
                    <p class="text-gray-300 mb-8 max-w-md">{profile::PITCH}</p>
                    <div class="flex space-x-4">
                        <a href=SectionId::Contact.href() class=GRADIENT_BUTTON>
                            "Contact Me"
                            <ChevronRightIcon class="ml-2 h-4 w-4" />
                        </a>
                        <a href=SectionId::Projects.href() class=OUTLINE_BUTTON>
                            "My Projects"
                        </a>
                    </div>
                </div>
                <div class="order-1 md:order-2 flex justify-center animate-zoom-in">
                    <div class="relative w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-4 border-purple-500/30 shadow-lg shadow-purple-500/20">
                        <img
                            src=profile::PORTRAIT
                            alt=profile::NAME
                            class="absolute inset-0 w-full h-full object-cover"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce">
                <a
                    href=SectionId::About.href()
                    class="text-gray-400 hover:text-purple-400"
                    aria-label="Scroll to about"
                >
                    <ArrowDownIcon />
                </a>
            </div>
        </section>
    }
}
