use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::TESTIMONIALS;
use crate::cycle::CyclicIndex;
use crate::hooks::use_interval;

#[component]
pub fn Testimonials() -> Element {
    let config = use_context::<SiteConfig>();
    let mut current = use_signal(|| CyclicIndex::new(TESTIMONIALS.len()));

    use_interval(config.testimonial_interval_ms, move || {
        let next = current.peek().next();
        current.set(next);
    });

    let Some(testimonial) = TESTIMONIALS.get(current().get()) else {
        return rsx! {};
    };

    rsx! {
        section { id: "testimonials", class: "testimonials-section",
            blockquote { class: "testimonial",
                p { class: "testimonial-quote", "“{testimonial.quote}”" }
                footer {
                    strong { "{testimonial.name}" }
                    span { class: "testimonial-school", " · {testimonial.school}" }
                    span { class: "testimonial-result", " · {testimonial.result}" }
                }
            }
        }
    }
}
