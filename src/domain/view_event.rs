//! View event model for asynchronous view counting.

/// A redirect that should be counted against a link.
///
/// Created by the redirect handler and sent to
/// [`crate::domain::view_worker::run_view_worker`] through a bounded channel,
/// so the redirect response never waits on the counter write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEvent {
    pub slug: String,
}

impl ViewEvent {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_event_creation() {
        let event = ViewEvent::new("google");
        assert_eq!(event.slug, "google");
        assert_eq!(event.clone(), event);
    }
}
