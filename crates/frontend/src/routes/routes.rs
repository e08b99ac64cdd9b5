use crate::dashboards::d100_overview::ui::OverviewDashboard;
use crate::domain::a001_deal::ui::list::DealList;
use crate::domain::a002_customer::ui::details::CustomerDetails;
use crate::domain::a002_customer::ui::list::CustomerList;
use crate::domain::a003_quote::ui::QuotesPage;
use crate::domain::a004_commission::ui::RevenuePage;
use crate::domain::a005_ticket::ui::SupportPage;
use crate::domain::a006_announcement::ui::AnnouncementsPage;
use crate::domain::a007_training::ui::TrainingPage;
use crate::domain::a008_resource::ui::ResourcesPage;
use crate::domain::a009_settings::ui::SettingsPage;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

/// Sidebar + header around the routed page. Everything under it requires
/// a signed-in partner.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <Outlet /> }.into_any()
            />
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=OverviewDashboard />
                    <Route path=path!("/deals") view=DealList />
                    <Route path=path!("/customers") view=CustomerList />
                    <Route path=path!("/customers/:customer_id") view=CustomerDetails />
                    <Route path=path!("/quotes") view=QuotesPage />
                    <Route path=path!("/revenue") view=RevenuePage />
                    <Route path=path!("/support") view=SupportPage />
                    <Route path=path!("/training") view=TrainingPage />
                    <Route path=path!("/enablement") view=ResourcesPage />
                    <Route path=path!("/announcements") view=AnnouncementsPage />
                    <Route path=path!("/settings") view=SettingsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
