//! Well-known carrier codes.
//!
//! The builder accepts these as plain strings; the constants exist so callers
//! don't have to spell them out.

/// Terms of trade (Incoterms) accepted by the carrier.
pub mod terms_of_trade {
    pub const EXW: &str = "EXW";
    pub const FCA: &str = "FCA";
    pub const CPT: &str = "CPT";
    pub const CFR: &str = "CFR";
    pub const CIP: &str = "CIP";
    pub const DAT: &str = "DAT";
    pub const DAP: &str = "DAP";
    pub const DDP: &str = "DDP";
    pub const DDU: &str = "DDU";
}

/// Shipment content types.
pub mod content_type {
    pub const DOCUMENTS: &str = "DOCUMENTS";
    pub const NON_DOCUMENTS: &str = "NON_DOCUMENTS";
}

/// UN hazard code for dry ice (carbon dioxide, solid).
pub const UN_CODE_DRY_ICE: &str = "UN1845";
