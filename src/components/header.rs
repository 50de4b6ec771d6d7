use leptos::*;

use crate::services::fetch_health;

#[component]
pub fn Header() -> impl IntoView {
    // None while the startup probe is still in flight
    let (service_up, set_service_up) = create_signal(None::<bool>);

    spawn_local(async move {
        match fetch_health().await {
            Ok(health) => {
                log::info!("🩺 Converter service reachable: {}", health.service);
                set_service_up.set(Some(health.is_ok()));
            }
            Err(e) => {
                log::warn!("🩺 Converter service unreachable: {}", e);
                set_service_up.set(Some(false));
            }
        }
    });

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"SHAPETOPOI"</a>
                <span class="badge">"NIMBY Rails mod builder"</span>
            </div>
            <div class="header-right">
                <div
                    class="service-status"
                    class:online=move || service_up.get() == Some(true)
                >
                    <span
                        class="status-dot"
                        class:online=move || service_up.get() == Some(true)
                    ></span>
                    <span id="serviceText">
                        {move || match service_up.get() {
                            None => "Checking converter...",
                            Some(true) => "Converter online",
                            Some(false) => "Converter offline",
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
