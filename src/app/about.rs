use leptos::prelude::*;

use super::icons::ChevronRightIcon;
use super::{Reveal, SectionHeading, CARD};
use crate::profile::{self, EDUCATION, RESEARCH};
use crate::sections::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.id() class="min-h-screen flex items-center py-20">
            <div class="container mx-auto px-4">
                <SectionHeading title="About Me" />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Reveal animation="animate-slide-right">
                        <h3 class="text-2xl font-bold mb-4 text-purple-400">
                            "Professional Summary"
                        </h3>
                        <p class="text-gray-300 mb-6">{profile::SUMMARY}</p>

                        <h3 class="text-2xl font-bold mb-4 text-purple-400">"Education"</h3>
                        <div class="mb-6">
                            <h4 class="text-xl font-semibold">
                                {format!("{} | {}", EDUCATION.degree, EDUCATION.years)}
                            </h4>
                            <p class="text-gray-400">{EDUCATION.school}</p>
                            <p class="text-gray-300 mt-2">
                                "Relevant Coursework: " {EDUCATION.coursework}
                            </p>
                        </div>

                        <div class="flex space-x-4">
                            {profile::LANGUAGES
                                .iter()
                                .map(|lang| {
                                    view! {
                                        <div class="flex items-center space-x-2 text-gray-300">
                                            <span class="w-2 h-2 rounded-full bg-purple-400"></span>
                                            <span>{*lang}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal animation="animate-slide-left" class=format!("{CARD} p-6")>
                        <h3 class="text-2xl font-bold mb-6 text-purple-400">
                            "Research Based Project Experience"
                        </h3>
                        <div class="relative pl-8 pb-8 border-l border-purple-500/30">
                            <div class="absolute left-0 top-0 w-4 h-4 rounded-full bg-purple-500 transform -translate-x-1/2"></div>
                            <h4 class="text-xl font-semibold">
                                {format!("{} | {}", RESEARCH.title, RESEARCH.year)}
                            </h4>
                            <p class="text-gray-400 mb-4">{RESEARCH.department}</p>
                            <ul class="space-y-2 text-gray-300">
                                {RESEARCH
                                    .highlights
                                    .iter()
                                    .map(|line| {
                                        view! {
                                            <li class="flex items-start">
                                                <ChevronRightIcon class="h-5 w-5 text-purple-400 mr-2 mt-0.5 flex-shrink-0" />
                                                <span>{*line}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
