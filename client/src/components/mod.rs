//! Reusable UI components shared by pages.

pub mod credentials_form;
