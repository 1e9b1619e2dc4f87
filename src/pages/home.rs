//! Landing page with the hero and the `#features` section the header links to.

use leptos::prelude::*;

use crate::components::header::Header;

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Snap a schedule",
        body: "Photograph a flyer, a timetable, or a whiteboard and get events back.",
    },
    Feature {
        title: "Review before saving",
        body: "Every extracted event is editable before it lands in your calendar.",
    },
    Feature {
        title: "Keep one calendar",
        body: "Imported events sit alongside everything else you already track.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <main class="landing">
            <section class="landing__hero">
                <h1>"Turn any picture of a schedule into calendar events"</h1>
                <p class="landing__lede">
                    "PicSchedule reads dates and times from your photos so you don't have to type them."
                </p>
            </section>
            <section id="features" class="landing__features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <article class="feature">
                                <h3>{feature.title}</h3>
                                <p>{feature.body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </main>
    }
}
