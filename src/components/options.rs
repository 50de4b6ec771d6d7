//! Conversion options fieldset.
//!
//! Plain named form fields, captured wholesale by the multipart body on
//! submission. The client applies no validation here: the converter
//! clamps or defaults every value server-side, so out-of-range input
//! degrades to the defaults instead of blocking the upload.

use leptos::*;

use crate::config;

#[component]
pub fn ConversionOptions() -> impl IntoView {
    view! {
        <fieldset class="conversion-options">
            <legend>"Conversion options"</legend>
            <div class="option-row">
                <label for="output-name">"Mod name"</label>
                <input
                    type="text"
                    id="output-name"
                    name="output-name"
                    value=config::DEFAULT_OUTPUT_NAME
                />
            </div>
            <div class="option-row">
                <label for="interpolate-distance">"Interpolate points every (meters)"</label>
                <input
                    type="number"
                    id="interpolate-distance"
                    name="interpolate-distance"
                    min="0"
                    step="any"
                    placeholder="off"
                />
            </div>
            <div class="option-row">
                <label for="max-lod">"Show POIs up to zoom level"</label>
                <select id="max-lod" name="max-lod">
                    {(0..=config::MAX_LOD)
                        .map(|lod| {
                            let preselect = lod == 0;
                            let label = if preselect {
                                "0 (close zoom only)".to_string()
                            } else {
                                lod.to_string()
                            };
                            view! {
                                <option value=lod.to_string() selected=preselect>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="option-row">
                <label for="poi-color">"POI color"</label>
                <input
                    type="color"
                    id="poi-color"
                    name="poi-color"
                    value=config::DEFAULT_POI_COLOR
                />
            </div>
        </fieldset>
    }
}
