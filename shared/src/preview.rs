//! Image preview logic for the file picker, independent of any UI runtime.
//! The frontend supplies the decode primitive and a [`PreviewSink`] over
//! its own presentation state.

use std::future::Future;

/// Fixed confirmation text shown once a preview decode completes.
pub const CONFIRMATION_TEXT: &str = "Imagen seleccionada ✅";

/// The three presentation targets the preview mutates, abstracted behind a
/// trait: an image surface, a fallback icon and a status label.
pub trait PreviewSink {
    /// Assigns the decoded data-URI as the image source.
    fn set_image_source(&self, source: &str);
    fn set_image_visible(&self, visible: bool);
    fn set_icon_visible(&self, visible: bool);
    fn set_status_text(&self, text: &str);
}

/// Ordered file handles taken from a change event. Only the first entry is
/// ever read; the selection may be empty (picker dismissed).
#[derive(Debug, Clone)]
pub struct FileSelection<F> {
    files: Vec<F>,
}

impl<F> FileSelection<F> {
    pub fn new(files: Vec<F>) -> Self {
        Self { files }
    }

    pub fn empty() -> Self {
        Self { files: Vec::new() }
    }

    fn into_first(self) -> Option<F> {
        self.files.into_iter().next()
    }
}

/// Failure of the asynchronous file-to-data-URI conversion.
/// [`handle_selection`] drops it silently; only the decode primitive's
/// own callers ever observe it.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("could not read file: {0}")]
    Unreadable(String),
}

/// Handles a file-input change event.
///
/// Takes the first entry of `selection`. An empty selection is a silent
/// no-op: the result is `None` and the sink is never touched. Otherwise
/// exactly one decode of that file into a data-URI is constructed and the
/// future driving it is returned with the continuation attached. On
/// success the continuation updates the image source, shows the image,
/// hides the icon and sets the status label to [`CONFIRMATION_TEXT`],
/// all within the one completion. On failure it does nothing and the
/// previous presentation state stays as it was.
///
/// The caller spawns the returned future and is never blocked. Overlapping
/// invocations each run their own decode; completions apply in the order
/// the reads finish, so the last one to complete determines the final
/// preview. There is no cancellation and no generation guard.
pub fn handle_selection<F, D, Fut, S>(
    selection: FileSelection<F>,
    decode: D,
    sink: S,
) -> Option<impl Future<Output = ()>>
where
    D: FnOnce(F) -> Fut,
    Fut: Future<Output = Result<String, DecodeError>>,
    S: PreviewSink,
{
    let file = selection.into_first()?;
    let read = decode(file);

    Some(async move {
        if let Ok(data_uri) = read.await {
            sink.set_image_source(&data_uri);
            sink.set_image_visible(true);
            sink.set_icon_visible(false);
            sink.set_status_text(CONFIRMATION_TEXT);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::future;
    use futures::task::LocalSpawnExt;

    /// In-memory stand-in for a browser file handle.
    #[derive(Clone)]
    struct FakeFile {
        mime: &'static str,
        bytes: Vec<u8>,
    }

    fn data_uri_of(file: &FakeFile) -> String {
        format!("data:{};base64,{}", file.mime, STANDARD.encode(&file.bytes))
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum SinkOp {
        ImageSource(String),
        ImageVisible(bool),
        IconVisible(bool),
        StatusText(String),
    }

    /// Final values per target, derived from the recorded operations.
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    struct PanelState {
        image_source: Option<String>,
        image_visible: Option<bool>,
        icon_visible: Option<bool>,
        status_text: Option<String>,
    }

    /// Records every mutation, so tests can assert both the final state
    /// and that nothing beyond the three targets was ever touched.
    #[derive(Clone, Default)]
    struct RecordingSink {
        ops: Rc<RefCell<Vec<SinkOp>>>,
    }

    impl RecordingSink {
        fn ops(&self) -> Vec<SinkOp> {
            self.ops.borrow().clone()
        }

        fn state(&self) -> PanelState {
            let mut state = PanelState::default();
            for op in self.ops.borrow().iter() {
                match op {
                    SinkOp::ImageSource(uri) => state.image_source = Some(uri.clone()),
                    SinkOp::ImageVisible(visible) => state.image_visible = Some(*visible),
                    SinkOp::IconVisible(visible) => state.icon_visible = Some(*visible),
                    SinkOp::StatusText(text) => state.status_text = Some(text.clone()),
                }
            }
            state
        }
    }

    impl PreviewSink for RecordingSink {
        fn set_image_source(&self, source: &str) {
            self.ops.borrow_mut().push(SinkOp::ImageSource(source.to_owned()));
        }

        fn set_image_visible(&self, visible: bool) {
            self.ops.borrow_mut().push(SinkOp::ImageVisible(visible));
        }

        fn set_icon_visible(&self, visible: bool) {
            self.ops.borrow_mut().push(SinkOp::IconVisible(visible));
        }

        fn set_status_text(&self, text: &str) {
            self.ops.borrow_mut().push(SinkOp::StatusText(text.to_owned()));
        }
    }

    /// Decoder that resolves immediately with the real data-URI of the
    /// fake file's bytes.
    fn decode_now(file: FakeFile) -> future::Ready<Result<String, DecodeError>> {
        future::ready(Ok(data_uri_of(&file)))
    }

    fn expected_ops(uri: &str) -> Vec<SinkOp> {
        vec![
            SinkOp::ImageSource(uri.to_owned()),
            SinkOp::ImageVisible(true),
            SinkOp::IconVisible(false),
            SinkOp::StatusText(CONFIRMATION_TEXT.to_owned()),
        ]
    }

    #[test]
    fn empty_selection_is_a_silent_no_op() {
        let sink = RecordingSink::default();

        let task = handle_selection(FileSelection::<FakeFile>::empty(), decode_now, sink.clone());

        assert!(task.is_none());
        assert!(sink.ops().is_empty());
    }

    #[test]
    fn completed_decode_updates_the_three_targets_and_nothing_else() {
        let file = FakeFile {
            mime: "image/png",
            bytes: vec![0x89, b'P', b'N', b'G'],
        };
        let uri = data_uri_of(&file);
        let sink = RecordingSink::default();

        let task = handle_selection(FileSelection::new(vec![file]), decode_now, sink.clone())
            .expect("selection carries a file");
        block_on(task);

        assert_eq!(sink.ops(), expected_ops(&uri));
    }

    #[test]
    fn only_the_first_file_is_read() {
        let first = FakeFile {
            mime: "image/png",
            bytes: vec![1, 2, 3],
        };
        let second = FakeFile {
            mime: "image/jpeg",
            bytes: vec![9, 9],
        };
        let uri = data_uri_of(&first);
        let sink = RecordingSink::default();
        let decodes = Rc::new(Cell::new(0_usize));

        let counting = {
            let decodes = Rc::clone(&decodes);
            move |file: FakeFile| {
                decodes.set(decodes.get() + 1);
                decode_now(file)
            }
        };
        let task = handle_selection(FileSelection::new(vec![first, second]), counting, sink.clone())
            .expect("selection carries files");
        block_on(task);

        assert_eq!(decodes.get(), 1);
        assert_eq!(sink.state().image_source.as_deref(), Some(uri.as_str()));
    }

    #[test]
    fn repeated_identical_selection_reaches_the_same_final_state() {
        let file = FakeFile {
            mime: "image/jpeg",
            bytes: vec![1, 2, 3, 4],
        };

        let once = RecordingSink::default();
        let task = handle_selection(FileSelection::new(vec![file.clone()]), decode_now, once.clone())
            .expect("selection carries a file");
        block_on(task);

        let twice = RecordingSink::default();
        for _ in 0..2 {
            let task =
                handle_selection(FileSelection::new(vec![file.clone()]), decode_now, twice.clone())
                    .expect("selection carries a file");
            block_on(task);
        }

        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn last_completed_read_wins_over_last_selected() {
        let file_a = FakeFile {
            mime: "image/png",
            bytes: vec![b'A'],
        };
        let file_b = FakeFile {
            mime: "image/png",
            bytes: vec![b'B'],
        };
        let uri_a = data_uri_of(&file_a);
        let uri_b = data_uri_of(&file_b);

        let sink = RecordingSink::default();
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let (tx_a, rx_a) = oneshot::channel::<Result<String, DecodeError>>();
        let (tx_b, rx_b) = oneshot::channel::<Result<String, DecodeError>>();

        // A is selected first, B second; both reads are still in flight.
        let task_a = handle_selection(
            FileSelection::new(vec![file_a]),
            move |_| async move { rx_a.await.expect("sender kept alive") },
            sink.clone(),
        )
        .expect("selection carries a file");
        let task_b = handle_selection(
            FileSelection::new(vec![file_b]),
            move |_| async move { rx_b.await.expect("sender kept alive") },
            sink.clone(),
        )
        .expect("selection carries a file");

        spawner.spawn_local(task_a).expect("spawn a");
        spawner.spawn_local(task_b).expect("spawn b");
        pool.run_until_stalled();
        assert!(sink.ops().is_empty());

        // B's read finishes first and becomes visible.
        tx_b.send(Ok(uri_b.clone())).expect("receiver alive");
        pool.run_until_stalled();
        assert_eq!(sink.state().image_source.as_deref(), Some(uri_b.as_str()));

        // A's stale read completes afterwards and still applies: the last
        // completion wins, not the last invocation.
        tx_a.send(Ok(uri_a.clone())).expect("receiver alive");
        pool.run_until_stalled();
        assert_eq!(sink.state().image_source.as_deref(), Some(uri_a.as_str()));
        assert_eq!(sink.ops().len(), 8);
    }

    #[test]
    fn failed_decode_leaves_every_target_untouched() {
        let file = FakeFile {
            mime: "image/png",
            bytes: vec![0, 1, 2],
        };
        let sink = RecordingSink::default();

        let task = handle_selection(
            FileSelection::new(vec![file]),
            |_: FakeFile| future::ready(Err(DecodeError::Unreadable("corrupt".into()))),
            sink.clone(),
        )
        .expect("selection carries a file");
        block_on(task);

        assert!(sink.ops().is_empty());
    }
}
