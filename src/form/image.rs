//! Image Read Sequencing
//!
//! Picking a file starts an asynchronous read into a data URL. Each read gets
//! a ticket; only the newest ticket may write its result into the draft.

use crate::form::draft::ImageSlot;

/// Whether a declared media type is accepted by the image field
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket(u64);

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageReads {
    latest: u64,
}

impl ImageReads {
    /// Start a read for a file of `media_type`; non-images get no ticket
    pub fn begin(&mut self, media_type: &str) -> Option<ReadTicket> {
        if !is_image_media_type(media_type) {
            return None;
        }
        self.latest += 1;
        Some(ReadTicket(self.latest))
    }

    pub fn is_current(&self, ticket: ReadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Invalidate every read still in flight
    pub fn cancel_pending(&mut self) {
        self.latest += 1;
    }

    /// Store a finished read if it is still the newest one
    pub fn complete<F>(&self, ticket: ReadTicket, slot: &mut ImageSlot<F>, file: F, data_url: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        slot.replace(file, data_url);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_image_leaves_preview_untouched() {
        let mut reads = ImageReads::default();
        let mut slot: ImageSlot<&str> = ImageSlot::stored(Some("https://cdn/old.png".into()));

        assert!(reads.begin("text/plain").is_none());
        assert!(reads.begin("").is_none());
        assert_eq!(slot.preview_url.as_deref(), Some("https://cdn/old.png"));
        assert!(slot.file.is_none());

        let ticket = reads.begin("image/png").unwrap();
        assert!(reads.complete(ticket, &mut slot, "new.png", "data:image/png;base64,AA".into()));
        assert_eq!(slot.file, Some("new.png"));
    }

    #[test]
    fn test_stale_read_is_discarded() {
        let mut reads = ImageReads::default();
        let mut slot: ImageSlot<&str> = ImageSlot::default();

        let first = reads.begin("image/jpeg").unwrap();
        let second = reads.begin("image/png").unwrap();

        // second finishes first, then the slower first read arrives
        assert!(reads.complete(second, &mut slot, "b.png", "data:b".into()));
        assert!(!reads.complete(first, &mut slot, "a.jpg", "data:a".into()));
        assert_eq!(slot.file, Some("b.png"));
        assert_eq!(slot.preview_url.as_deref(), Some("data:b"));
    }

    #[test]
    fn test_cancel_pending_drops_in_flight_read() {
        let mut reads = ImageReads::default();
        let mut slot: ImageSlot<&str> = ImageSlot::default();

        let ticket = reads.begin("image/webp").unwrap();
        reads.cancel_pending();
        slot.clear();

        assert!(!reads.complete(ticket, &mut slot, "late.webp", "data:late".into()));
        assert!(!slot.has_image());
    }
}
