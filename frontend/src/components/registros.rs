use shared::registro::Registro;
use yew::prelude::*;

use super::super::{Model, Msg};
use crate::components::utils::debounce;

pub fn render_registros(model: &Model, ctx: &Context<Model>) -> Html {
    if model.registros.is_empty() {
        return html! {
            <div class="empty-state">
                <i class="fa-solid fa-folder-open"></i>
                <p>{"No hay registros guardados todavía."}</p>
            </div>
        };
    }

    let link = ctx.link().clone();

    html! {
        <div class="registros-section">
            <div class="registros-toolbar">
                <h2>{ format!("Registros ({})", model.registros.len()) }</h2>
                <button
                    class="action-btn"
                    onclick={debounce(300, move || link.send_message(Msg::DownloadCsv))}
                >
                    <i class="fa-solid fa-download"></i>{" Descargar CSV"}
                </button>
            </div>

            <table class="registros-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Fecha y hora"}</th>
                        <th>{"Matrícula"}</th>
                        <th>{"Propietario"}</th>
                        <th>{"Tipo"}</th>
                        <th>{"Observación"}</th>
                        <th>{"Imagen"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for model.registros.iter().map(|registro| render_row(ctx, registro)) }
                </tbody>
            </table>
        </div>
    }
}

fn render_row(ctx: &Context<Model>, registro: &Registro) -> Html {
    let id = registro.id;
    let link = ctx.link();

    html! {
        <tr key={id.to_string()}>
            <td>{ id.to_string() }</td>
            <td>{ &registro.fecha_hora }</td>
            <td class="matricula">{ &registro.matricula }</td>
            <td>{ &registro.propietario }</td>
            <td>{ registro.tipo_vehiculo.to_string() }</td>
            <td>{ &registro.observacion }</td>
            <td>
                <img
                    class="registro-thumb"
                    src={registro.imagen.clone()}
                    alt={registro.matricula.clone()}
                />
            </td>
            <td>
                <button
                    class="remove-btn"
                    title="Eliminar este registro"
                    onclick={link.callback(move |_| Msg::DeleteRegistro(id))}
                >
                    <i class="fa-solid fa-trash"></i>
                </button>
            </td>
        </tr>
    }
}
