//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"nimby_shapetopoi • not affiliated with Weird and Wry"</div>
            <div class="footer-links">
                <a
                    href="https://github.com/supermanifolds/nimby_shapetopoi"
                    class="footer-link"
                    target="_blank"
                >
                    "GitHub"
                </a>
                <a
                    href="https://www.openrailwaymap.org/"
                    class="footer-link"
                    target="_blank"
                >
                    "OpenRailwayMap"
                </a>
            </div>
        </footer>
    }
}
