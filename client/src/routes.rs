//! Static page-to-path mapping for the four views.
//!
//! Protection of `/dashboard` is not enforced here; the dashboard page checks
//! the session itself on mount.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Logical views of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Landing, Route::Login, Route::Register, Route::Dashboard];

    /// Absolute path used for navigation and links.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Router segment (path without the leading slash).
    #[must_use]
    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }
}
