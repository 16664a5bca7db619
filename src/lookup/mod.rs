// src/lookup/mod.rs

pub mod criteria;
pub mod demo;
pub mod lookup_error;
pub mod models;
pub mod normalize;

pub use criteria::CompSearchCriteria;
pub use demo::DemoComps;
pub use lookup_error::{ListingError, LookupError};
pub use models::{RawListing, RawSubject};
pub use normalize::{normalize_listings, parse_full_address, AddressParts};

use crate::config::CompConfig;
use crate::domain::{Comp, PropertyInput, SubjectProperty};
use tracing::{info, warn};

/// External source of subject details and sold comps.
pub trait CompLookup {
    fn find_subject(&self, address: &str) -> Result<RawSubject, LookupError>;

    fn find_comps(&self, criteria: &CompSearchCriteria) -> Result<Vec<RawListing>, LookupError>;
}

/// Looks up an address and normalizes the record into analysis input.
pub fn lookup_subject(lookup: &dyn CompLookup, address: &str) -> Result<PropertyInput, LookupError> {
    let raw = lookup.find_subject(address)?;
    PropertyInput::from_raw_subject(&raw, address)
}

/// Fetches and normalizes comps for `subject`.
///
/// Falls back to [`DemoComps`] when there is no lookup or the lookup fails.
/// A successful lookup that finds nothing yields an empty list.
pub fn gather_comps(lookup: Option<&dyn CompLookup>, subject: &SubjectProperty, cfg: &CompConfig) -> Vec<Comp> {
    let Some(lookup) = lookup else {
        warn!("no comp lookup configured, using demo comps");
        return DemoComps::default().generate(subject.living_area());
    };

    let criteria = CompSearchCriteria::for_subject(subject);
    match lookup.find_comps(&criteria) {
        Ok(raw) => {
            let comps = normalize_listings(&raw, cfg.max_comps);
            info!(
                postal_code = %criteria.postal_code,
                found = raw.len(),
                kept = comps.len(),
                "comp lookup complete"
            );
            comps
        }
        Err(e) => {
            warn!(error = %e, "comp lookup failed, using demo comps");
            DemoComps::default().generate(subject.living_area())
        }
    }
}
