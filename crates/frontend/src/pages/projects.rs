//! Projects listing page component.

use web_types::{Project, ProjectId};
use yew::prelude::*;

use crate::api::{self, ApiConfig};
use crate::app::Route;
use crate::components::{Loading, ProjectCard, ProjectCardProps};

/// Projects page component.
#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let projects = use_state(Vec::<Project>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    // Fetch projects once on mount
    {
        let projects = projects.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_projects(&ApiConfig::default()).await {
                    Ok(records) => projects.set(records),
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

    html! {
        <div>
            <div
                class="bg-cover bg-center h-screen flex items-center justify-center relative"
                style="background-image: url('/bg.png')"
            >
                <h1 class="relative text-white font-bold font-mono text-4xl sm:text-6xl text-center">
                    {"Our Projects"}
                </h1>
            </div>

            <div class="bg-[#0D1C9A] py-8">
                <div class="container mx-auto px-4 py-8 bg-[#0D1C9A] rounded-lg">
                    if *is_loading {
                        <Loading message="Loading projects..." />
                    } else if let Some(message) = &*error {
                        <div class="text-red-500 text-center">{ format!("Error: {}", message) }</div>
                    } else {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                            { for projects.iter().enumerate().map(|(index, project)| {
                                let props = card_props(project);
                                let key = project
                                    .id
                                    .as_ref()
                                    .map(ProjectId::to_string)
                                    .unwrap_or_else(|| index.to_string());
                                html! {
                                    <ProjectCard
                                        key={key}
                                        image_url={props.image_url}
                                        title={props.title}
                                        description={props.description}
                                        short_description={props.short_description}
                                        link={props.link}
                                    />
                                }
                            })}
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

/// Build the card props for one fetched record.
///
/// The card's always-shown lead line is its `short_description` prop and
/// the optional second line is its `description` prop; the backend fields
/// feed them crosswise.
fn card_props(project: &Project) -> ProjectCardProps {
    let id = project
        .id
        .as_ref()
        .map(ProjectId::to_string)
        .unwrap_or_default();

    ProjectCardProps {
        image_url: project.img.clone().unwrap_or_default(),
        title: project.title.clone().unwrap_or_default(),
        description: project.short_description.clone().unwrap_or_default(),
        short_description: project.description.clone().unwrap_or_default(),
        link: Route::ProjectDetail { id },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    fn sample_project() -> Project {
        Project {
            id: Some(ProjectId::Number(1)),
            img: Some("a.png".to_string()),
            title: Some("A".to_string()),
            description: Some("d1".to_string()),
            short_description: Some("s1".to_string()),
        }
    }

    #[test]
    fn test_card_texts_come_from_the_opposite_fields() {
        let props = card_props(&sample_project());

        // Lead line carries the backend `description`, the optional second
        // line carries `short_description`.
        assert_eq!(props.short_description, "d1");
        assert_eq!(props.description, "s1");
        assert_eq!(props.title, "A");
        assert_eq!(props.image_url, "a.png");
    }

    #[test]
    fn test_card_link_targets_the_project_id() {
        let props = card_props(&sample_project());

        assert_eq!(props.link.to_path(), "/projects/1");
    }

    #[test]
    fn test_card_link_with_text_id() {
        let project = Project {
            id: Some(ProjectId::Text("rec1a2b".to_string())),
            ..Project::default()
        };

        assert_eq!(card_props(&project).link.to_path(), "/projects/rec1a2b");
    }

    #[test]
    fn test_card_props_for_sparse_record() {
        let props = card_props(&Project::default());

        assert_eq!(props.image_url, "");
        assert_eq!(props.title, "");
        assert_eq!(props.description, "");
        assert_eq!(props.short_description, "");
        assert_eq!(props.link.to_path(), "/projects/");
    }
}
