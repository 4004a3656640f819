mod admissions;
mod analytics;
mod application_form;
mod banner;
mod browser;
mod carousel;
mod config;
mod content;
mod cycle;
mod gallery;
mod hero;
mod hooks;
mod language;
mod modal;
mod navbar;
mod notification;
mod outcomes;
mod reveal;
mod routes;
mod scroll;
mod tabs;
mod testimonials;
#[cfg(test)]
mod test_support;

fn main() {
    dioxus::launch(routes::App);
}
