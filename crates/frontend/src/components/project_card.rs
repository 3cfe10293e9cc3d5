//! Project card component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for ProjectCard component.
#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub image_url: String,
    pub title: String,
    /// Secondary line, rendered only when non-empty.
    pub description: String,
    /// Lead line, always rendered.
    pub short_description: String,
    pub link: Route,
}

/// One project in the grid: image, title, texts and a "Read More" link.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    html! {
        <div class="project-item bg-blue-50 rounded-lg shadow-md p-4">
            <img
                src={props.image_url.clone()}
                alt={props.title.clone()}
                width="200"
                height="300"
                class="rounded-lg w-full h-80 object-cover"
            />
            <div class="pt-4 flex flex-col justify-between">
                <div>
                    <h3 class="text-xl font-semibold text-blue-600">{ &props.title }</h3>
                    <p class="text-gray-600 mt-2">{ &props.short_description }</p>
                    if !props.description.is_empty() {
                        <p class="text-gray-500 mt-1">{ &props.description }</p>
                    }
                </div>
                <Link<Route> to={props.link.clone()} classes="text-blue-600 hover:underline mt-2 self-start">
                    {"Read More"}
                </Link<Route>>
            </div>
        </div>
    }
}
