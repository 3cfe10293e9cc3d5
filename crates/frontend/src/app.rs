//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{ProjectDetailPage, ProjectsPage};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Projects,
    #[at("/projects/:id")]
    ProjectDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Projects => html! { <ProjectsPage /> },
        Route::ProjectDetail { id } => html! { <ProjectDetailPage id={id} /> },
        Route::NotFound => html! {
            <div class="container mx-auto px-4 py-8 text-center">
                <h1 class="text-2xl font-semibold">{"404 - Page Not Found"}</h1>
                <p class="text-gray-600 mt-2">{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
