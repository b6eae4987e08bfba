use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    StaticSegment,
};

use crate::components::auth_guard::AuthGuard;
use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::catalogue::CataloguePage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::loans::LoansPage;
use crate::pages::login::LoginPage;
use crate::pages::my_loans::MyLoansPage;
use crate::pages::register::RegisterPage;
use crate::pages::users::UsersPage;
use crate::session::provide_session;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/biblio-console.css" />
        <Title text="Bibliothèque" />
        <ToastProvider>
            <Router>
                <Routes fallback=|| view! { <p>"Page introuvable."</p> }.into_any()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path="/dashboard" /> }
                    />
                    <Route path=StaticSegment("login") view=LoginPage />
                    <Route path=StaticSegment("register") view=RegisterPage />
                    <Route path=StaticSegment("dashboard") view=DashboardView />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("catalogue"))
                        view=CatalogueView
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("my-loans"))
                        view=MyLoansView
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("loans"))
                        view=LoansView
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("users"))
                        view=UsersView
                    />
                </Routes>
            </Router>
        </ToastProvider>
    }
}

#[component]
fn Layout(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    view! {
        <AuthGuard admin_only=admin_only>
            <div class="app-layout">
                <Nav />
                <main class="main-content">{children()}</main>
            </div>
        </AuthGuard>
    }
}

#[component]
fn DashboardView() -> impl IntoView {
    view! {
        <Layout>
            <DashboardPage />
        </Layout>
    }
}

#[component]
fn CatalogueView() -> impl IntoView {
    view! {
        <Layout>
            <CataloguePage />
        </Layout>
    }
}

#[component]
fn MyLoansView() -> impl IntoView {
    view! {
        <Layout>
            <MyLoansPage />
        </Layout>
    }
}

#[component]
fn LoansView() -> impl IntoView {
    view! {
        <Layout admin_only=true>
            <LoansPage />
        </Layout>
    }
}

#[component]
fn UsersView() -> impl IntoView {
    view! {
        <Layout admin_only=true>
            <UsersPage />
        </Layout>
    }
}
