use gloo_file::{File as GlooFile, ObjectUrl};
use shared::preview::FileSelection;
use shared::registro::{Registro, TipoVehiculo};
use yew::prelude::*;

mod components;
mod preview;
mod storage;

use components::form::render_form;
use components::handlers;
use components::header::{render_header, render_nav};
use components::registros::render_registros;
use components::utils::render_flash;

/// Status label shown before any image has been picked.
pub const INITIAL_STATUS: &str = "Ninguna imagen seleccionada";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    Registros,
}

#[derive(Clone, Copy)]
pub enum FlashKind {
    Ok,
    Error,
}

/// One-shot notice shown after a registry operation.
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

/// Presentation state of the image preview. Only sink messages mutate it.
pub struct PreviewPanel {
    pub image_source: Option<String>,
    pub image_visible: bool,
    pub icon_visible: bool,
    pub status_text: String,
}

/// In-progress form fields for the next record.
pub struct RegistroForm {
    pub matricula: String,
    pub propietario: String,
    pub tipo_vehiculo: TipoVehiculo,
    pub observacion: String,
}

// Yew msg components
pub enum Msg {
    // Preview pipeline
    ImageSelected(FileSelection<GlooFile>),
    SetPreviewSource(String),
    SetPreviewVisible(bool),
    SetIconVisible(bool),
    SetStatusText(String),

    // Form fields
    SetMatricula(String),
    SetPropietario(String),
    SetTipoVehiculo(TipoVehiculo),
    SetObservacion(String),

    // Registry operations
    SaveRegistro,
    DeleteRegistro(u64),
    DownloadCsv,

    // UI states
    SwitchView(View),
}

// Main component
pub struct Model {
    pub preview: PreviewPanel,
    pub form: RegistroForm,
    pub registros: Vec<Registro>,
    pub export_url: Option<ObjectUrl>,
    pub view: View,
    pub flash: Option<Flash>,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let registros = storage::load_registros();
        log::info!("Loaded {} stored records", registros.len());

        Self {
            preview: PreviewPanel {
                image_source: None,
                image_visible: false,
                icon_visible: true,
                status_text: INITIAL_STATUS.to_string(),
            },
            form: RegistroForm {
                matricula: String::new(),
                propietario: String::new(),
                tipo_vehiculo: TipoVehiculo::default(),
                observacion: String::new(),
            },
            registros,
            export_url: None,
            view: View::Form,
            flash: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Preview pipeline
            Msg::ImageSelected(selection) => handlers::handle_image_selected(ctx, selection),
            Msg::SetPreviewSource(source) => {
                self.preview.image_source = Some(source);
                true
            }
            Msg::SetPreviewVisible(visible) => {
                self.preview.image_visible = visible;
                true
            }
            Msg::SetIconVisible(visible) => {
                self.preview.icon_visible = visible;
                true
            }
            Msg::SetStatusText(text) => {
                self.preview.status_text = text;
                true
            }

            // Form fields
            Msg::SetMatricula(value) => {
                self.form.matricula = value;
                true
            }
            Msg::SetPropietario(value) => {
                self.form.propietario = value;
                true
            }
            Msg::SetTipoVehiculo(tipo) => {
                self.form.tipo_vehiculo = tipo;
                true
            }
            Msg::SetObservacion(value) => {
                self.form.observacion = value;
                true
            }

            // Registry operations
            Msg::SaveRegistro => handlers::handle_save_registro(self),
            Msg::DeleteRegistro(id) => handlers::handle_delete_registro(self, id),
            Msg::DownloadCsv => handlers::handle_download_csv(self),

            // UI states
            Msg::SwitchView(view) => {
                if self.view == view {
                    false
                } else {
                    self.view = view;
                    self.flash = None;
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_nav(self, ctx) }
                    { render_flash(self) }
                    {
                        match self.view {
                            View::Form => render_form(self, ctx),
                            View::Registros => render_registros(self, ctx),
                        }
                    }
                </main>

                <footer class="app-footer">
                    <p>{"Registro de Matrículas | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
