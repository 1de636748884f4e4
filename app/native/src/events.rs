//! Centralized bus event names.
//!
//! Inbound events are consumed by the session; outbound events are emitted
//! by it. Names follow the host bus conventions and must not change, since
//! sibling skills and the rendering surface match on them verbatim.

/// Events owned by the homescreen itself.
pub mod homescreen {
    /// Set a wallpaper from a remote image.
    ///
    /// Payload: `{ url: String }`
    pub const WALLPAPER_SET: &str = "homescreen.wallpaper.set";

    /// Advance to the next wallpaper (voice request).
    ///
    /// Payload: `()` (no payload)
    pub const WALLPAPER_CHANGE: &str = "homescreen.wallpaper.change";

    /// Swipe gesture on the idle page, advances to the next wallpaper.
    ///
    /// Payload: `()` (no payload)
    pub const SWIPE_CHANGE_WALLPAPER: &str = "homescreen.swipe.change.wallpaper";

    /// Activate the home view and repopulate the display model.
    ///
    /// Payload: `()` (no payload)
    pub const IDLE_ACTIVATE: &str = "homescreen.idle.activate";

    /// Stop the event loop and cancel repeating callbacks.
    ///
    /// Payload: `()` (no payload)
    pub const SHUTDOWN: &str = "homescreen.shutdown";

    /// Emitted with a full display model snapshot after it changed.
    ///
    /// Payload: `{ model: Object }`
    pub const GUI_SYNC: &str = "homescreen.gui.sync";

    /// Emitted when a page should be displayed.
    ///
    /// Payload: `{ page: String }`
    pub const GUI_SHOW_PAGE: &str = "homescreen.gui.show_page";
}

/// Notification widget events.
pub mod notification {
    /// Notification counter changed.
    ///
    /// Payload: `{ notification_counter: Number | String }`
    pub const UPDATE_COUNTER: &str = "ovos.notification.update_counter";

    /// Full notification storage model pushed by the provider.
    ///
    /// Payload: `{ notification_model: Any }`
    pub const UPDATE_STORAGE_MODEL: &str = "ovos.notification.update_storage_model";

    /// Ask the notification provider for its full storage model.
    ///
    /// Payload: `()` (no payload)
    pub const REQUEST_STORAGE_MODEL: &str = "ovos.notification.api.request.storage.model";
}

/// Host system events.
pub mod system {
    /// The assistant finished starting up. Fires once.
    ///
    /// Payload: `()` (no payload)
    pub const READY: &str = "mycroft.ready";

    /// Ask the host to show the idle screen.
    ///
    /// Payload: `()` (no payload)
    pub const SHOW_IDLE: &str = "mycroft.device.show.idle";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_homescreen_events_share_prefix() {
        let events = [
            homescreen::WALLPAPER_SET,
            homescreen::WALLPAPER_CHANGE,
            homescreen::SWIPE_CHANGE_WALLPAPER,
            homescreen::IDLE_ACTIVATE,
            homescreen::SHUTDOWN,
            homescreen::GUI_SYNC,
            homescreen::GUI_SHOW_PAGE,
        ];

        for event in events {
            assert!(
                event.starts_with("homescreen."),
                "Event '{event}' should start with 'homescreen.'"
            );
        }
    }

    #[test]
    fn test_event_names_are_unique() {
        let mut events = vec![
            homescreen::WALLPAPER_SET,
            homescreen::WALLPAPER_CHANGE,
            homescreen::SWIPE_CHANGE_WALLPAPER,
            homescreen::IDLE_ACTIVATE,
            homescreen::SHUTDOWN,
            homescreen::GUI_SYNC,
            homescreen::GUI_SHOW_PAGE,
            notification::UPDATE_COUNTER,
            notification::UPDATE_STORAGE_MODEL,
            notification::REQUEST_STORAGE_MODEL,
            system::READY,
            system::SHOW_IDLE,
        ];
        let total = events.len();
        events.sort_unstable();
        events.dedup();
        assert_eq!(events.len(), total);
    }
}
