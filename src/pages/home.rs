use yew::prelude::*;

use crate::components::hydration::HydrationGate;
use crate::components::navigation::Navigation;
use crate::components::scroll_progress::ScrollProgressBar;
use crate::sections::footer::Footer;
use crate::sections::hero::HeroSection;
use crate::sections::problem::ProblemSection;
use crate::sections::promise::PromiseSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <HydrationGate>
            <ScrollProgressBar />
            <Navigation />
            <main class="home">
                <HeroSection />
                <PromiseSection />
                <ProblemSection />
            </main>
            <Footer />
        </HydrationGate>
    }
}
