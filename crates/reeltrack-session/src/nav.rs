//! Navigation routes and host-shell seams.

use std::fmt;

/// Application routes the session core can target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Main protected view
    Plane,
    Login,
    Register,
    Playlists,
    Views,
    Search,
    Film(String),
    Playlist(String),
    Profile(String),
    Subscribers(String),
    Subscriptions(String),
}

impl Route {
    /// The URL path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Plane => "/plane".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Playlists => "/playlists".to_string(),
            Route::Views => "/views".to_string(),
            Route::Search => "/search".to_string(),
            Route::Film(id) => format!("/film/{}", id),
            Route::Playlist(id) => format!("/playlist/{}", id),
            Route::Profile(id) => format!("/profile/{}", id),
            Route::Subscribers(id) => format!("/profile/{}/subscribers", id),
            Route::Subscriptions(id) => format!("/profile/{}/subscriptions", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Host-shell router seam.
///
/// The core only ever requests navigation; carrying it out (and ignoring
/// it on the server pass, where no window exists) is the shell's business.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// User-visible notification seam (snackbar/toast in the shell).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
