use leptos::html;
use leptos::prelude::*;

use super::reveal::use_seen_once;
use super::{Reveal, SectionHeading, CARD};
use crate::profile::{bar_width, SOFT_SKILLS, TECHNICAL_SKILLS};
use crate::sections::SectionId;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.id() class="min-h-screen flex items-center py-20">
            <div class="container mx-auto px-4">
                <SectionHeading title="My Skills" />
                <div class="grid md:grid-cols-2 gap-12">
                    <Reveal animation="animate-fade-up">
                        <h3 class="text-2xl font-bold mb-6 text-purple-400">"Technical Skills"</h3>
                        <div class="space-y-6">
                            {TECHNICAL_SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <div>
                                            <div class="flex justify-between mb-2">
                                                <span class="text-gray-300">{skill.name}</span>
                                                <span class="text-purple-400">{skill.detail}</span>
                                            </div>
                                            <SkillBar level=skill.level delay_ms={200 + 100 * i} />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal animation="animate-fade-up">
                        <h3 class="text-2xl font-bold mb-6 text-purple-400">"Soft Skills"</h3>
                        <div class="grid grid-cols-2 gap-6">
                            {SOFT_SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <Reveal
                                            animation="animate-zoom-in"
                                            class=format!("{CARD} p-6 text-center")
                                            delay_ms={100 * i}
                                        >
                                            <div class="text-4xl mb-4">{skill.icon}</div>
                                            <h4 class="text-lg font-semibold mb-2">{skill.name}</h4>
                                            <SkillBar level=skill.level delay_ms=200 />
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Progress bar that grows from zero to `level` percent the first time it
/// scrolls into view.
#[component]
fn SkillBar(level: u8, delay_ms: usize) -> impl IntoView {
    let track = NodeRef::<html::Div>::new();
    let seen = use_seen_once(track);

    view! {
        <div node_ref=track class="w-full h-2 bg-gray-700 rounded-full overflow-hidden">
            <div
                class="h-full bg-gradient-to-r from-purple-500 to-pink-500 transition-[width] duration-1000 ease-out"
                style=move || bar_style(level, delay_ms, seen.get())
            ></div>
        </div>
    }
}

fn bar_style(level: u8, delay_ms: usize, seen: bool) -> String {
    let width = bar_width(if seen { level } else { 0 });
    format!("{width}; transition-delay: {delay_ms}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_is_empty_until_seen() {
        assert_eq!(bar_style(85, 300, false), "width: 0%; transition-delay: 300ms");
        assert_eq!(bar_style(85, 300, true), "width: 85%; transition-delay: 300ms");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_render_leaves_bars_empty() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! { <Skills /> }.to_html();
            assert!(html.contains("width: 0%"));
            assert!(!html.contains("width: 85%"));
            assert!(!html.contains("animate-zoom-in"));
            assert!(!html.contains("animate-fade-up"));
        });
    }
}
