use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <Hero />
            <Features />
            <ContactForm />
            <Footer />
        </div>
    }
}
