use gloo_file::File as GlooFile;
use gloo_file::futures::read_as_data_url;
use shared::preview::{DecodeError, PreviewSink};
use yew::html::Scope;

use super::{Model, Msg};

/// Sink that forwards each presentation update to the component as a
/// message. Messages sent from one completion are applied back to back,
/// so another completion cannot interleave with them.
#[derive(Clone)]
pub struct ScopeSink {
    link: Scope<Model>,
}

impl ScopeSink {
    pub fn new(link: Scope<Model>) -> Self {
        Self { link }
    }
}

impl PreviewSink for ScopeSink {
    fn set_image_source(&self, source: &str) {
        self.link.send_message(Msg::SetPreviewSource(source.to_owned()));
    }

    fn set_image_visible(&self, visible: bool) {
        self.link.send_message(Msg::SetPreviewVisible(visible));
    }

    fn set_icon_visible(&self, visible: bool) {
        self.link.send_message(Msg::SetIconVisible(visible));
    }

    fn set_status_text(&self, text: &str) {
        self.link.send_message(Msg::SetStatusText(text.to_owned()));
    }
}

/// Reads the whole file into a `data:` URI via the browser's FileReader.
pub async fn decode_data_url(file: GlooFile) -> Result<String, DecodeError> {
    read_as_data_url(&file)
        .await
        .map_err(|e| DecodeError::Unreadable(e.to_string()))
}
