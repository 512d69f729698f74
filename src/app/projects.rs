use leptos::prelude::*;

use super::{Reveal, SectionHeading, CARD, OUTLINE_BUTTON};
use crate::profile::PROJECTS;
use crate::sections::SectionId;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.id() class="min-h-screen flex items-center py-20">
            <div class="container mx-auto px-4">
                <SectionHeading title="My Projects" />
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal
                                    animation="animate-fade-up"
                                    class=format!("{CARD} overflow-hidden")
                                    delay_ms={200 * i}
                                >
                                    <div class="p-6">
                                        <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                                        <p class="text-gray-300 text-sm mb-4">{project.year}</p>
                                        <p class="text-gray-300 mb-4">{project.description}</p>
                                        <div class="flex flex-wrap gap-2 mb-4">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="px-3 py-1 bg-purple-900/30 rounded-full text-xs text-purple-300">
                                                            {*tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <button type="button" class=format!("{OUTLINE_BUTTON} w-full")>
                                            "View Details"
                                        </button>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
