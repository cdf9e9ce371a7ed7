use lexaid_model::{CandidateFile, DocumentDescriptor, DocumentKind};
use serde::Serialize;

use crate::Error;

/// Where the intake is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No document.
    Empty,
    /// A document was accepted and is being "processed".
    Processing,
    /// The current document is ready.
    Ready,
}

/// Drag-and-drop events over the drop zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEvent {
    /// A drag entered the zone.
    Enter,
    /// A drag moved over the zone.
    Over,
    /// A drag left the zone.
    Leave,
    /// Something was dropped on the zone.
    Drop,
}

/// An input to [`IntakeState::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntakeEvent {
    /// A file was picked or dropped.
    Accept(CandidateFile),
    /// Simulated processing of the given generation finished.
    ProcessingFinished(u64),
    /// The user removed the current document.
    Remove,
    /// Drop-zone hover tracking.
    Drag(DragEvent),
}

/// Work the owner of the state has to carry out after a transition.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Finish processing `generation` after the configured delay,
    /// abandoning any processing still pending.
    ScheduleProcessing {
        /// Identifies this acceptance.
        generation: u64,
    },
    /// Abandon any processing still pending.
    CancelProcessing,
    /// Processing finished; tell the user.
    Processed(DocumentDescriptor),
}

/// Checks a candidate file against the allow-list and the size limit.
///
/// The media type is checked first, so a file that is both too large and
/// of the wrong type is reported as [`crate::ErrorKind::UnsupportedType`].
pub fn validate(
    file: &CandidateFile,
    max_size_bytes: u64,
) -> Result<DocumentDescriptor, Error> {
    let Some(kind) = DocumentKind::from_media_type(&file.media_type) else {
        return Err(Error::unsupported_type().with_reason(format!(
            "{} has media type {:?}",
            file.name, file.media_type
        )));
    };
    if file.size_bytes > max_size_bytes {
        return Err(Error::too_large().with_reason(format!(
            "{} is {} bytes, the limit is {max_size_bytes} bytes",
            file.name, file.size_bytes
        )));
    }
    Ok(DocumentDescriptor::new(&file.name, file.size_bytes, kind))
}

/// The uploaded document, its processing flag and the drop-zone hint.
///
/// This is also the snapshot type handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IntakeState {
    current: Option<DocumentDescriptor>,
    processing: bool,
    drag_active: bool,
    max_size_bytes: u64,
    #[serde(skip)]
    generation: u64,
}

impl IntakeState {
    /// Creates an empty intake that accepts files up to `max_size_bytes`.
    #[inline]
    pub fn new(max_size_bytes: u64) -> Self {
        Self {
            current: None,
            processing: false,
            drag_active: false,
            max_size_bytes,
            generation: 0,
        }
    }

    /// The current document.
    #[inline]
    pub fn current(&self) -> Option<&DocumentDescriptor> {
        self.current.as_ref()
    }

    /// Whether the current document is still being processed.
    #[inline]
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Whether a drag is hovering over the drop zone.
    #[inline]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// The upload limit in bytes, inclusive.
    #[inline]
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        match (&self.current, self.processing) {
            (None, _) => Phase::Empty,
            (Some(_), true) => Phase::Processing,
            (Some(_), false) => Phase::Ready,
        }
    }

    /// Applies an event.
    ///
    /// On error the state is left untouched. Completions for a generation
    /// that has since been replaced or removed are ignored.
    pub fn apply(
        &mut self,
        event: IntakeEvent,
    ) -> Result<Option<Effect>, Error> {
        match event {
            IntakeEvent::Accept(file) => {
                let doc = validate(&file, self.max_size_bytes)?;
                self.generation += 1;
                self.current = Some(doc);
                self.processing = true;
                Ok(Some(Effect::ScheduleProcessing {
                    generation: self.generation,
                }))
            }
            IntakeEvent::ProcessingFinished(generation) => {
                if generation != self.generation || !self.processing {
                    debug!("ignoring stale completion #{generation}");
                    return Ok(None);
                }
                self.processing = false;
                Ok(self.current.clone().map(Effect::Processed))
            }
            IntakeEvent::Remove => {
                if self.current.is_none() {
                    return Ok(None);
                }
                self.current = None;
                self.processing = false;
                Ok(Some(Effect::CancelProcessing))
            }
            IntakeEvent::Drag(event) => {
                self.drag_active =
                    matches!(event, DragEvent::Enter | DragEvent::Over);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lexaid_model::DEFAULT_MAX_SIZE_BYTES;

    use super::*;
    use crate::ErrorKind;

    const PDF: &str = "application/pdf";

    fn accept(
        state: &mut IntakeState,
        name: &str,
        size: u64,
        media_type: &str,
    ) -> Result<Option<Effect>, Error> {
        state.apply(IntakeEvent::Accept(CandidateFile::new(
            name, size, media_type,
        )))
    }

    fn finish(state: &mut IntakeState, generation: u64) -> Option<Effect> {
        state
            .apply(IntakeEvent::ProcessingFinished(generation))
            .unwrap()
    }

    #[test]
    fn test_unsupported_type() {
        let mut state = IntakeState::new(DEFAULT_MAX_SIZE_BYTES);
        let err = accept(&mut state, "photo.png", 10, "image/png").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
        assert_eq!(state, IntakeState::new(DEFAULT_MAX_SIZE_BYTES));
    }

    #[test]
    fn test_size_boundary() {
        let mut state = IntakeState::new(DEFAULT_MAX_SIZE_BYTES);
        let err = accept(&mut state, "big.pdf", DEFAULT_MAX_SIZE_BYTES + 1, PDF)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooLarge);
        assert_eq!(state.phase(), Phase::Empty);

        let effect =
            accept(&mut state, "max.pdf", DEFAULT_MAX_SIZE_BYTES, PDF).unwrap();
        assert_eq!(effect, Some(Effect::ScheduleProcessing { generation: 1 }));
        assert_eq!(state.phase(), Phase::Processing);
        assert_eq!(state.current().unwrap().name(), "max.pdf");
    }

    #[test]
    fn test_type_is_checked_before_size() {
        let mut state = IntakeState::new(100);
        let err =
            accept(&mut state, "huge.png", 1000, "image/png").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    }

    #[test]
    fn test_zero_byte_file_is_accepted() {
        let mut state = IntakeState::new(DEFAULT_MAX_SIZE_BYTES);
        accept(&mut state, "empty.txt", 0, "text/plain").unwrap();
        assert_eq!(state.current().unwrap().size_bytes(), 0);
    }

    #[test]
    fn test_lifecycle() {
        let mut state = IntakeState::new(DEFAULT_MAX_SIZE_BYTES);
        assert_eq!(state.apply(IntakeEvent::Remove).unwrap(), None);
        assert_eq!(state.phase(), Phase::Empty);

        let docx = DocumentKind::WordOpenXml.media_type();
        accept(&mut state, "lease.docx", 2048, docx).unwrap();
        let effect = finish(&mut state, 1);
        let Some(Effect::Processed(doc)) = effect else {
            panic!("expected a processed effect, got {effect:?}");
        };
        assert_eq!(doc.name(), "lease.docx");
        assert_eq!(state.phase(), Phase::Ready);

        let effect = state.apply(IntakeEvent::Remove).unwrap();
        assert_eq!(effect, Some(Effect::CancelProcessing));
        assert_eq!(state.phase(), Phase::Empty);
        assert!(state.current().is_none());
    }

    #[test]
    fn test_replacement_discards_previous() {
        let mut state = IntakeState::new(DEFAULT_MAX_SIZE_BYTES);
        accept(&mut state, "old.pdf", 1, PDF).unwrap();
        assert!(finish(&mut state, 1).is_some());

        let effect = accept(&mut state, "new.txt", 2, "text/plain").unwrap();
        assert_eq!(effect, Some(Effect::ScheduleProcessing { generation: 2 }));
        assert_eq!(state.phase(), Phase::Processing);
        assert_eq!(state.current().unwrap().name(), "new.txt");

        // A late completion for the old document changes nothing.
        assert_eq!(finish(&mut state, 1), None);
        assert!(state.is_processing());
        assert!(finish(&mut state, 2).is_some());
        assert!(!state.is_processing());
    }

    #[test]
    fn test_completion_after_remove_is_ignored() {
        let mut state = IntakeState::new(DEFAULT_MAX_SIZE_BYTES);
        accept(&mut state, "a.pdf", 1, PDF).unwrap();
        assert_eq!(
            state.apply(IntakeEvent::Remove).unwrap(),
            Some(Effect::CancelProcessing)
        );
        assert_eq!(finish(&mut state, 1), None);
        assert_eq!(state.phase(), Phase::Empty);
    }

    #[test]
    fn test_invalid_upload_keeps_current() {
        let mut state = IntakeState::new(DEFAULT_MAX_SIZE_BYTES);
        accept(&mut state, "keep.pdf", 1, PDF).unwrap();
        let _ = finish(&mut state, 1);
        let before = state.clone();

        assert!(
            accept(&mut state, "x.exe", 1, "application/x-msdownload")
                .is_err()
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_drag_tracking() {
        let mut state = IntakeState::new(DEFAULT_MAX_SIZE_BYTES);
        for (event, active) in [
            (DragEvent::Enter, true),
            (DragEvent::Leave, false),
            (DragEvent::Over, true),
            (DragEvent::Drop, false),
        ] {
            assert_eq!(state.apply(IntakeEvent::Drag(event)).unwrap(), None);
            assert_eq!(state.is_drag_active(), active);
        }
    }
}
