use leptos::prelude::*;

use crate::components::profile_card::ProfileCard;
use crate::models::UserProfile;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="page profile-page">
            <h2>"User Profile"</h2>
            <ProfileCard profile=UserProfile::demo() />
        </div>
    }
}
