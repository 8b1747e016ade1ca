//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardRouterPage, donation_detail::DonationDetailPage, donation_new::NewDonationPage,
    donor::DonorDashboardPage, foodbank::FoodbankDashboardPage, individual::IndividualDashboardPage,
    login::LoginPage, register::RegisterPage, statistics::StatisticsPage, volunteer::VolunteerDashboardPage,
};
use crate::session::{ROUTER_PATH, Session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session handle every page reads the token through and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Session::browser());

    view! {
        <Stylesheet id="leptos" href="/pkg/foodshare.css"/>
        <Title text="FoodShare"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=ROUTER_PATH/> }/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardRouterPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("donor")) view=DonorDashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("foodbank")) view=FoodbankDashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("volunteer")) view=VolunteerDashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("individual")) view=IndividualDashboardPage/>
                <Route path=(StaticSegment("donations"), StaticSegment("new")) view=NewDonationPage/>
                <Route path=(StaticSegment("donations"), ParamSegment("id")) view=DonationDetailPage/>
                <Route path=StaticSegment("statistics") view=StatisticsPage/>
            </Routes>
        </Router>
    }
}
