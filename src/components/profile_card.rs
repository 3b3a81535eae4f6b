use leptos::prelude::*;
use send_wrapper::SendWrapper;
use tracing::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::cancel::CancelToken;
use crate::config::use_config;
use crate::models::UserProfile;
use crate::profile::ProfileState;

/// Shows `profile` after a simulated delay.
#[component]
pub fn ProfileCard(
    /// The record to display once the delay elapses.
    profile: UserProfile,
    /// Overrides the configured delay.
    #[prop(optional)]
    delay_ms: Option<u32>,
) -> impl IntoView {
    let config = use_config();
    let delay_ms = delay_ms.unwrap_or(config.profile_delay_ms);
    let fallback_avatar = config.default_avatar;

    let (state, set_state) = signal(ProfileState::default());
    let token = CancelToken::detached();

    info!("Profile card mounted, loading in {}ms", delay_ms);

    let timer_token = token.clone();
    let callback = Closure::once(move || {
        set_state.update(|s| {
            if !s.resolve(&timer_token, profile) {
                debug!("Profile timer fired after teardown, ignoring");
            }
        });
    });

    let handle = web_sys::window().and_then(|window| {
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .ok()
    });
    if handle.is_none() {
        warn!("Could not schedule profile timer");
    }

    // The closure must outlive the timer, so it is dropped with the component
    let cleanup = SendWrapper::new((token, callback));
    on_cleanup(move || {
        let (token, _callback) = cleanup.take();
        token.cancel();
        if let (Some(id), Some(window)) = (handle, web_sys::window()) {
            window.clear_timeout_with_handle(id);
        }
    });

    view! {
        <div class="profile-card" aria-busy=move || state.with(ProfileState::is_loading).to_string()>
            {move || state.with(|s| match s.profile() {
                None => view! {
                    <div class="profile-loading">"Loading..."</div>
                }.into_any(),
                Some(user) => {
                    let avatar = user.avatar_src(&fallback_avatar).to_string();
                    view! {
                        <div class="user-card">
                            <img src=avatar alt=user.name.clone() />
                            <div>
                                <h3>{user.name.clone()}</h3>
                                <p>{user.email.clone()}</p>
                                <p>{user.phone.clone()}</p>
                            </div>
                        </div>
                    }.into_any()
                }
            })}
        </div>
    }
}
