use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{FeatureCard, Icon, LearnMoreButton};
use crate::hooks::use_title;
use crate::{Route, State, content};

/// Marketing page for signed-out visitors. Owns the ref to the features
/// section and hands it to both the section and the hero's Learn More
/// button, so the scroll target is wired at composition time.
#[function_component]
pub fn LandingPage() -> Html {
    use_title(content::PAGE_TITLE);
    let features_ref = use_node_ref();

    html! {
        <main class="min-h-screen">
            <HeroSection features_ref={features_ref.clone()} />
            <FeaturesSection section_ref={features_ref} />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    features_ref: NodeRef,
}

#[function_component]
fn HeroSection(props: &HeroProps) -> Html {
    let (state, _) = use_store::<State>();

    html! {
        <section class="max-w-3xl mx-auto px-4 py-16 md:py-24">
            <div class="flex flex-col items-center text-center gap-8">
                <span class="inline-flex items-center px-4 py-1 rounded-full text-xs font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300">
                    { Icon::Sparkles.svg("mr-2 h-3 w-3") }
                    { content::HERO_BADGE }
                </span>

                <h1 class="text-4xl md:text-6xl font-bold tracking-tight text-neutral-900 dark:text-neutral-100">
                    { content::PRODUCT_NAME }
                </h1>

                <p class="text-xl md:text-2xl text-neutral-600 dark:text-neutral-400 max-w-2xl">
                    { content::TAGLINE }
                </p>

                // The call to action only makes sense for visitors without
                // a session.
                if !state.is_authenticated() {
                    <div class="flex flex-col sm:flex-row gap-4">
                        <Link<Route>
                            to={Route::Login}
                            classes="inline-flex items-center justify-center gap-2 px-6 py-3 rounded-md text-base font-medium bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white transition-colors"
                        >
                            {"Get Started"}
                            { Icon::ArrowRight.svg("h-4 w-4") }
                        </Link<Route>>
                        <LearnMoreButton target={props.features_ref.clone()} />
                    </div>
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FeaturesProps {
    section_ref: NodeRef,
}

#[function_component]
fn FeaturesSection(props: &FeaturesProps) -> Html {
    html! {
        <section
            ref={props.section_ref.clone()}
            id="features"
            class="px-4 py-16 bg-neutral-50 dark:bg-neutral-800/50"
        >
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold mb-4 text-neutral-900 dark:text-neutral-100">
                        { content::FEATURES_HEADING }
                    </h2>
                    <p class="text-neutral-600 dark:text-neutral-400 max-w-2xl mx-auto">
                        { content::FEATURES_SUBHEADING }
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-12">
                    { for content::FEATURES.iter().map(|feature| html! {
                        <FeatureCard
                            key={feature.title}
                            icon={feature.icon}
                            title={feature.title}
                            description={feature.description}
                            badge={feature.badge.map(AttrValue::from)}
                        />
                    }) }
                </div>

                <hr class="my-12 border-neutral-200 dark:border-neutral-700" />

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 max-w-4xl mx-auto">
                    { for content::BENEFITS.iter().map(|benefit| html! {
                        <div key={benefit.id} class="flex items-center gap-3 text-sm">
                            { benefit.icon.svg("h-5 w-5 flex-shrink-0 text-neutral-900 dark:text-neutral-100") }
                            <span class="text-neutral-600 dark:text-neutral-400">
                                { benefit.text }
                            </span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
