use leptos::prelude::*;

use super::icons::{MailIcon, MapPinIcon, PhoneIcon};
use super::{Reveal, SectionHeading, GRADIENT_BUTTON};
use crate::profile::{self, SOCIAL_LINKS};
use crate::sections::SectionId;

const INPUT: &str = "w-full bg-purple-900/10 border border-purple-500/30 rounded-lg px-4 py-3 text-white focus:outline-none focus:ring-2 focus:ring-purple-500/50";
const LABEL: &str = "block text-sm font-medium text-gray-300 mb-2";
const ICON_TILE: &str = "bg-purple-900/30 p-3 rounded-lg text-purple-400";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.id() class="min-h-screen flex items-center py-20">
            <div class="container mx-auto px-4">
                <SectionHeading title="Get In Touch" />
                <div class="grid md:grid-cols-2 gap-12">
                    <Reveal animation="animate-slide-right">
                        <h3 class="text-2xl font-bold mb-6 text-purple-400">"Contact Information"</h3>
                        <div class="space-y-6">
                            <div class="flex items-start space-x-4">
                                <div class=ICON_TILE>
                                    <MailIcon class="h-6 w-6" />
                                </div>
                                <div>
                                    <h4 class="text-lg font-semibold">"Email"</h4>
                                    <a
                                        href=profile::mailto()
                                        class="text-gray-300 hover:text-purple-400 transition-colors"
                                    >
                                        {profile::EMAIL}
                                    </a>
                                </div>
                            </div>
                            <div class="flex items-start space-x-4">
                                <div class=ICON_TILE>
                                    <PhoneIcon class="h-6 w-6" />
                                </div>
                                <div>
                                    <h4 class="text-lg font-semibold">"Phone"</h4>
                                    <a
                                        href=profile::tel()
                                        class="text-gray-300 hover:text-purple-400 transition-colors"
                                    >
                                        {profile::PHONE_DISPLAY}
                                    </a>
                                </div>
                            </div>
                            <div class="flex items-start space-x-4">
                                <div class=ICON_TILE>
                                    <MapPinIcon class="h-6 w-6" />
                                </div>
                                <div>
                                    <h4 class="text-lg font-semibold">"Location"</h4>
                                    <p class="text-gray-300">{profile::LOCATION}</p>
                                </div>
                            </div>
                        </div>

                        <div class="mt-8">
                            <h4 class="text-lg font-semibold mb-4">"Connect With Me"</h4>
                            <div class="flex space-x-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                class="bg-purple-900/30 p-3 rounded-lg text-purple-400 hover:bg-purple-500/30 transition-colors text-2xl"
                                                aria-label=link.label
                                            >
                                                <i class=link.icon></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>

                    <Reveal animation="animate-slide-left">
                        <h3 class="text-2xl font-bold mb-6 text-purple-400">"Send Me a Message"</h3>
                        // presentational only, nothing is submitted anywhere
                        <form class="space-y-6">
                            <div class="grid md:grid-cols-2 gap-6">
                                <Field name="name" label="Your Name" kind="text" placeholder=profile::NAME />
                                <Field
                                    name="email"
                                    label="Your Email"
                                    kind="email"
                                    placeholder="darshit@example.com"
                                />
                            </div>
                            <Field name="subject" label="Subject" kind="text" placeholder="Project Inquiry" />
                            <div>
                                <label for="message" class=LABEL>
                                    "Message"
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    class=INPUT
                                    placeholder="Your message here..."
                                ></textarea>
                            </div>
                            <button type="submit" class=format!("{GRADIENT_BUTTON} w-full")>
                                "Send Message"
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Field(
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class=LABEL>
                {label}
            </label>
            <input type=kind id=name name=name class=INPUT placeholder=placeholder />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_every_form_field_is_named() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! { <Contact /> }.to_html();
            for field in ["name", "email", "subject", "message"] {
                assert!(html.contains(&format!("id=\"{field}\"")), "{field} missing");
                assert!(html.contains(&format!("name=\"{field}\"")), "{field} unnamed");
            }
            assert!(html.contains("<textarea"));
        });
    }
}
