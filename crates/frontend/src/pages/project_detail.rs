//! Project detail page component.

use web_types::Project;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiConfig};
use crate::app::Route;
use crate::components::Loading;

/// Properties for ProjectDetailPage.
#[derive(Properties, PartialEq)]
pub struct ProjectDetailPageProps {
    pub id: String,
}

/// Project detail page component.
///
/// The backend only exposes the list endpoint, so the page fetches the
/// list and selects the record whose id matches the route.
#[function_component(ProjectDetailPage)]
pub fn project_detail_page(props: &ProjectDetailPageProps) -> Html {
    let project = use_state(|| None::<Project>);
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let project_id = props.id.clone();

    // Fetch the list and select the requested record
    {
        let project = project.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let project_id = project_id.clone();

        use_effect_with(project_id.clone(), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_projects(&ApiConfig::default()).await {
                    Ok(records) => {
                        project.set(records.into_iter().find(|p| p.matches_id(&project_id)));
                    }
                    Err(e) => {
                        let message = e.to_string();
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Failed to fetch projects: {}", e).into(),
                            );
                        })
                        .forget();
                        error.set(Some(message));
                    }
                }
                is_loading.set(false);
            });
        });
    }

    if *is_loading {
        return html! { <Loading message="Loading project..." /> };
    }

    if let Some(message) = &*error {
        return html! {
            <div class="text-red-500 text-center py-8">{ format!("Error: {}", message) }</div>
        };
    }

    let Some(project) = project.as_ref() else {
        return html! {
            <div class="container mx-auto px-4 py-8 text-center">
                <h1 class="text-2xl font-semibold">{"Project Not Found"}</h1>
                <p class="text-gray-600 mt-2">{"The requested project could not be found."}</p>
            </div>
        };
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="project-item bg-blue-50 rounded-lg shadow-md p-4 max-w-2xl mx-auto">
                if let Some(img) = &project.img {
                    <img
                        src={img.clone()}
                        alt={project.title.clone().unwrap_or_default()}
                        class="rounded-lg w-full h-80 object-cover"
                    />
                }
                <div class="pt-4">
                    <h1 class="text-2xl font-semibold text-blue-600">
                        { project.title.clone().unwrap_or_default() }
                    </h1>
                    if let Some(short) = &project.short_description {
                        <p class="text-gray-600 mt-2">{ short }</p>
                    }
                    if let Some(description) = &project.description {
                        <p class="text-gray-500 mt-2">{ description }</p>
                    }
                    <Link<Route> to={Route::Projects} classes="text-blue-600 hover:underline mt-4 inline-block">
                        {"Back to projects"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
