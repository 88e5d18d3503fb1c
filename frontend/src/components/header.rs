use yew::prelude::*;

use super::super::{Model, Msg, View};

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-car"></i> {" Registro de Matrículas"}</h1>
            <p class="subtitle">{"Captura la placa, revisa la vista previa y guarda el registro"}</p>
        </header>
    }
}

pub fn render_nav(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let tab = |view: View, icon: &'static str, label: &'static str| {
        let active = model.view == view;
        html! {
            <button
                class={classes!("nav-tab", active.then_some("active"))}
                onclick={link.callback(move |_| Msg::SwitchView(view))}
            >
                <i class={icon}></i>{ format!(" {}", label) }
            </button>
        }
    };

    html! {
        <nav class="view-nav">
            { tab(View::Form, "fa-solid fa-plus", "Nuevo registro") }
            { tab(View::Registros, "fa-solid fa-table-list", "Registros") }
        </nav>
    }
}
