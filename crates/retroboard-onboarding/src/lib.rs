//! Retroboard — guided onboarding bounded context.
//!
//! Responsible for the phase/step progression a first-time user walks
//! through, resuming that progression after a page reload, and routing the
//! user into the onboarding board once it has been created.

pub mod application;
pub mod domain;
