use yew::prelude::*;

use crate::contact::form::ContactForm;
use crate::reveal::observer::Reveal;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <main class="page">
            <section id="contact" class="section">
                <div class="container narrow">
                    <Reveal class="section-header">
                        <span class="badge">{"Early Access"}</span>
                        <h1>{"Contact K Entertainment Studio"}</h1>
                        <p>
                            {"Studios, archives and independent creators: tell us what you need preserved "}
                            {"and we will get back to you within two business days."}
                        </p>
                    </Reveal>
                    <Reveal class="glass-card contact-card">
                        <ContactForm />
                    </Reveal>
                </div>
            </section>
        </main>
    }
}
