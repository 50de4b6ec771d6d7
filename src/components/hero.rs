//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"NIMBY Rails Shapefile to POI Converter"</h1>
            <p class="subtitle">
                "Turn shapefile, KML or KMZ geometry into a ready-to-install "
                "NIMBY Rails POI mod. Drop your files below, tweak the options, "
                "and download the generated mod zip."
            </p>
        </div>
    }
}
