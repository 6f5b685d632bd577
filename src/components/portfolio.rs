use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config::PORTFOLIO_PRESS_MS;

/// Keys that activate a focused portfolio card.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[derive(Properties, PartialEq)]
pub struct PortfolioItemProps {
    pub title: AttrValue,
    pub category: AttrValue,
    pub description: AttrValue,
}

#[function_component(PortfolioItem)]
pub fn portfolio_item(props: &PortfolioItemProps) -> Html {
    let pressed = use_state(|| false);

    let activate = {
        let pressed = pressed.clone();
        let title = props.title.clone();
        let category = props.category.clone();
        Callback::from(move |_: ()| {
            info!("Portfolio item clicked: {} - {}", title, category);
            pressed.set(true);
            let release = pressed.setter();
            Timeout::new(PORTFOLIO_PRESS_MS, move || release.set(false)).forget();
        })
    };

    let onclick = {
        let activate = activate.clone();
        Callback::from(move |_: MouseEvent| activate.emit(()))
    };
    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if is_activation_key(&e.key()) {
            e.prevent_default();
            activate.emit(());
        }
    });

    html! {
        <article
            class={classes!("portfolio-item", (*pressed).then(|| "pressed"))}
            tabindex="0"
            role="button"
            onclick={onclick}
            onkeydown={onkeydown}
        >
            <span class="portfolio-category">{props.category.clone()}</span>
            <h3 class="portfolio-title">{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
        </article>
    }
}
