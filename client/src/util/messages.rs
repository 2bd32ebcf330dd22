//! User-facing text (Indonesian).

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

pub const APP_TITLE: &str = "Auth Portal";

pub const LANDING_HEADING: &str = "Selamat Datang";
pub const LANDING_PROMPT: &str = "Silakan masuk atau daftar untuk melanjutkan.";

pub const LOGIN_PENDING: &str = "Sedang login...";
pub const LOGIN_SUCCESS: &str = "Login berhasil!";

pub const REGISTER_HEADING: &str = "Registrasi Pengguna";
pub const REGISTER_PENDING: &str = "Sedang mendaftar...";
/// Shown when the backend accepts a registration with an empty body.
pub const REGISTER_SUCCESS: &str = "Registrasi berhasil!";

pub const CREDENTIALS_REQUIRED: &str = "Username dan password wajib diisi.";

/// Transport failure on the login and register forms.
pub const CONNECTION_FAILED: &str = "Koneksi ke server gagal. Pastikan backend berjalan.";
/// Transport failure while loading the dashboard.
pub const DASHBOARD_CONNECTION_FAILED: &str = "Koneksi ke server gagal.";
pub const DASHBOARD_LOADING: &str = "Memuat dashboard...";

pub const NOT_FOUND: &str = "Halaman tidak ditemukan.";

/// Failure template for a rejected login or registration.
#[must_use]
pub fn failure(detail: &str) -> String {
    format!("Gagal: {detail}")
}

/// Failure template for a rejected dashboard fetch.
#[must_use]
pub fn dashboard_failure(detail: &str) -> String {
    format!("Gagal memuat dashboard: {detail}")
}
