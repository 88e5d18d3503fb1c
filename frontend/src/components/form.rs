use shared::registro::{MATRICULA_MAX, TipoVehiculo};
use std::str::FromStr;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::super::{Model, Msg};
use crate::components::utils::{debounce, display_style, selection_from_input};

pub fn render_form(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="form-section">
            { render_picker(model, ctx) }
            { render_fields(model, ctx) }
            { render_save_button(ctx) }
        </div>
    }
}

fn render_picker(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let selection = selection_from_input(&input);

        // Clearing the value lets the same file fire another change event.
        input.set_value("");

        Msg::ImageSelected(selection)
    });

    html! {
        <div class="picker-section">
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />
            <label for="file-input" class="picker-button">
                <i class="fa-solid fa-camera"></i>{" Seleccionar imagen"}
            </label>

            <div class="preview-area">
                <i
                    id="previewIcon"
                    class="fa-solid fa-image preview-icon"
                    style={display_style(model.preview.icon_visible)}
                ></i>
                <img
                    id="previewImg"
                    src={model.preview.image_source.clone()}
                    alt="Vista previa"
                    style={display_style(model.preview.image_visible)}
                />
                <p id="previewText" class="preview-text">{ &model.preview.status_text }</p>
            </div>
        </div>
    }
}

fn render_fields(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let on_matricula = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetMatricula(input.value())
    });
    let on_propietario = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetPropietario(input.value())
    });
    let on_tipo = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetTipoVehiculo(TipoVehiculo::from_str(&select.value()).unwrap_or_default())
    });
    let on_observacion = link.callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetObservacion(area.value())
    });

    html! {
        <div class="form-fields">
            <label class="field">
                <span>{"Matrícula"}</span>
                <input
                    type="text"
                    value={model.form.matricula.clone()}
                    maxlength={MATRICULA_MAX.to_string()}
                    placeholder="ABC-123"
                    oninput={on_matricula}
                />
            </label>
            <label class="field">
                <span>{"Propietario"}</span>
                <input
                    type="text"
                    value={model.form.propietario.clone()}
                    placeholder="Nombre del propietario"
                    oninput={on_propietario}
                />
            </label>
            <label class="field">
                <span>{"Tipo de vehículo"}</span>
                <select onchange={on_tipo}>
                    { for TipoVehiculo::all().map(|tipo| {
                        let label = tipo.to_string();
                        html! {
                            <option
                                value={label.clone()}
                                selected={model.form.tipo_vehiculo == tipo}
                            >
                                { label }
                            </option>
                        }
                    })}
                </select>
            </label>
            <label class="field">
                <span>{"Observación"}</span>
                <textarea
                    value={model.form.observacion.clone()}
                    placeholder="Opcional"
                    oninput={on_observacion}
                />
            </label>
        </div>
    }
}

fn render_save_button(ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <button
            class="action-btn"
            onclick={debounce(300, move || link.send_message(Msg::SaveRegistro))}
        >
            <i class="fa-solid fa-floppy-disk"></i>{" Guardar registro"}
        </button>
    }
}
