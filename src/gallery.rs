use dioxus::prelude::*;

use crate::browser::sleep_ms;
use crate::content::LAB_IMAGES;

pub const FADE_MS: u32 = 200;

/// Main image selection with its fade-out/fade-in.
///
/// Every thumbnail click takes a new generation. A delayed swap only lands
/// while its generation is still the latest, so rapid clicks never let an
/// older swap fade the image back in under a newer one.
#[derive(Clone, Copy)]
pub struct LabView {
    selected: Signal<usize>,
    faded: Signal<bool>,
    generation: Signal<u64>,
}

impl LabView {
    pub fn selected(&self) -> usize {
        (self.selected)()
    }

    pub fn is_faded(&self) -> bool {
        (self.faded)()
    }

    pub fn pick(self, position: usize) {
        let generation = self.fade_out();
        spawn(async move {
            sleep_ms(FADE_MS).await;
            self.swap_in(generation, position);
        });
    }

    fn fade_out(mut self) -> u64 {
        let generation = *self.generation.peek() + 1;
        self.generation.set(generation);
        self.faded.set(true);
        generation
    }

    fn swap_in(mut self, generation: u64, position: usize) {
        if *self.generation.peek() != generation {
            return;
        }
        self.selected.set(position);
        self.faded.set(false);
    }
}

pub fn use_lab_view() -> LabView {
    let selected = use_signal(|| 0usize);
    let faded = use_signal(|| false);
    let generation = use_signal(|| 0u64);
    LabView {
        selected,
        faded,
        generation,
    }
}

#[component]
pub fn LabGallery() -> Element {
    let view = use_lab_view();

    let Some(main) = LAB_IMAGES.get(view.selected()).or(LAB_IMAGES.first()) else {
        return rsx! {};
    };
    let opacity = if view.is_faded() { "0" } else { "1" };

    rsx! {
        section { id: "lab", class: "lab-section",
            h2 { class: "section-title",
                span { class: "zh", "顶尖实验室资源" }
                span { class: "en", "World-Class Lab Facilities" }
            }
            div { class: "lab-image main",
                img {
                    src: main.src,
                    alt: main.alt,
                    style: "opacity: {opacity}; transition: opacity 0.2s ease;",
                }
                span { class: "lab-label", "{main.alt}" }
            }
            div { class: "lab-thumbnails",
                for (position, image) in LAB_IMAGES.iter().enumerate() {
                    img {
                        key: "{position}",
                        src: image.src,
                        alt: image.alt,
                        onclick: move |_| view.pick(position),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::test_support::{mount, settle};
    use pretty_assertions::assert_eq;

    thread_local! {
        static VIEW: Cell<Option<LabView>> = const { Cell::new(None) };
        static PICKS_ON_MOUNT: Cell<&'static [usize]> = const { Cell::new(&[]) };
    }

    #[component]
    fn GalleryHost() -> Element {
        let view = use_lab_view();
        VIEW.with(|cell| cell.set(Some(view)));
        use_hook(move || {
            for &position in PICKS_ON_MOUNT.with(Cell::get) {
                view.pick(position);
            }
        });
        rsx! {}
    }

    fn view() -> LabView {
        VIEW.with(Cell::get).expect("gallery mounted")
    }

    fn shown(view: LabView) -> (usize, bool) {
        (*view.selected.peek(), *view.faded.peek())
    }

    #[test]
    fn stale_swap_is_skipped() {
        PICKS_ON_MOUNT.with(|cell| cell.set(&[]));
        let dom = mount(GalleryHost);
        let view = view();

        let first = dom.in_runtime(|| view.fade_out());
        let second = dom.in_runtime(|| view.fade_out());

        dom.in_runtime(|| view.swap_in(first, 1));
        assert_eq!(dom.in_runtime(|| shown(view)), (0, true));

        dom.in_runtime(|| view.swap_in(second, 2));
        assert_eq!(dom.in_runtime(|| shown(view)), (2, false));
    }

    #[tokio::test]
    async fn rapid_clicks_settle_on_the_last_thumbnail() {
        PICKS_ON_MOUNT.with(|cell| cell.set(&[1, 3, 2]));
        let mut dom = mount(GalleryHost);
        let view = view();
        assert_eq!(dom.in_runtime(|| shown(view)), (0, true));

        settle(&mut dom).await;
        assert_eq!(dom.in_runtime(|| shown(view)), (2, false));
    }
}
