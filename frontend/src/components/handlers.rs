use gloo_file::{Blob, File as GlooFile, ObjectUrl};
use shared::preview::FileSelection;
use shared::registro::{NO_DETECTADA, Registro, TipoVehiculo, export_csv, next_id, normalize_matricula};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::super::{Flash, FlashKind, INITIAL_STATUS, Model};
use crate::components::utils::fecha_actual;
use crate::preview::{ScopeSink, decode_data_url};
use crate::storage;

/// Kicks off the preview read for a fresh file selection. An empty
/// selection produces no task and nothing changes. The component state is
/// only touched later, by the sink messages a completed read sends, so
/// overlapping reads resolve in completion order.
pub fn handle_image_selected(ctx: &Context<Model>, selection: FileSelection<GlooFile>) -> bool {
    let sink = ScopeSink::new(ctx.link().clone());
    if let Some(task) = shared::preview::handle_selection(selection, decode_data_url, sink) {
        spawn_local(task);
    }
    false
}

pub fn handle_save_registro(model: &mut Model) -> bool {
    let Some(imagen) = model.preview.image_source.clone() else {
        model.flash = Some(Flash {
            kind: FlashKind::Error,
            text: "⚠️ Debes subir una imagen".into(),
        });
        return true;
    };

    let mut matricula = normalize_matricula(&model.form.matricula);
    if matricula.is_empty() {
        matricula = NO_DETECTADA.to_string();
    }

    let registro = Registro {
        id: next_id(&model.registros),
        fecha_hora: fecha_actual(),
        matricula,
        propietario: model.form.propietario.trim().to_string(),
        tipo_vehiculo: model.form.tipo_vehiculo,
        observacion: model.form.observacion.trim().to_string(),
        imagen,
    };

    log::info!("Saving record {} for plate {}", registro.id, registro.matricula);
    model.registros.push(registro);
    persist(model);

    model.flash = Some(Flash {
        kind: FlashKind::Ok,
        text: "✅ Registro guardado correctamente".into(),
    });
    reset_form(model);
    true
}

pub fn handle_delete_registro(model: &mut Model, id: u64) -> bool {
    let before = model.registros.len();
    model.registros.retain(|r| r.id != id);
    if model.registros.len() == before {
        return false;
    }

    log::info!("Deleted record {}", id);
    persist(model);
    model.flash = Some(Flash {
        kind: FlashKind::Ok,
        text: "Registro eliminado correctamente".into(),
    });
    true
}

pub fn handle_download_csv(model: &mut Model) -> bool {
    let csv = export_csv(&model.registros);
    let blob = Blob::new_with_options(csv.as_str(), Some("text/csv;charset=utf-8"));
    let url = ObjectUrl::from(blob);
    trigger_download(&url, "registros.csv");

    // The object URL must outlive the click that consumes it.
    model.export_url = Some(url);
    false
}

fn persist(model: &Model) {
    if let Err(e) = storage::save_registros(&model.registros) {
        log::error!("Failed to persist records: {}", e);
    }
}

fn reset_form(model: &mut Model) {
    model.form.matricula.clear();
    model.form.propietario.clear();
    model.form.observacion.clear();
    model.form.tipo_vehiculo = TipoVehiculo::default();

    model.preview.image_source = None;
    model.preview.image_visible = false;
    model.preview.icon_visible = true;
    model.preview.status_text = INITIAL_STATUS.to_string();
}

fn trigger_download(url: &ObjectUrl, filename: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let anchor = document.create_element("a").unwrap();
    anchor.set_attribute("href", url).unwrap();
    anchor.set_attribute("download", filename).unwrap();

    let body = document.body().unwrap();
    body.append_child(&anchor).unwrap();
    if let Some(element) = anchor.dyn_ref::<web_sys::HtmlElement>() {
        element.click();
    }
    anchor.remove();
}
