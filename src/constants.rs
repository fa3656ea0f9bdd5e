//! # Constants and type definitions for iau-wkt
//!
//! This module centralizes the **numeric tolerances**, **GIS code offsets**, the fixed
//! **WKT fragments** and the **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Floating-point tolerance used by every equality test on radii
//! - Offsets that turn a NAIF identifier into a GIS code
//! - The catalogue sentinel used for unknown values
//! - Units and citations that every emitted WKT shares

// -------------------------------------------------------------------------------------------------
// Numerical constants
// -------------------------------------------------------------------------------------------------

/// Absolute tolerance used when comparing two radii (or a flattening against zero)
pub const EQUALITY_TOLERANCE: f64 = 1e-9;

/// Catalogue convention for an unknown value
pub const UNKNOWN_SENTINEL: f64 = -1.0;

/// Multiplier applied to a NAIF identifier to get the base GIS code of a body
pub const GIS_CODE_FACTOR: i64 = 100;

/// GIS code offset of the ocentric CRS of a body
pub const OCENTRIC_OFFSET: i64 = 0;

/// GIS code offset of the ographic CRS of a body (always one above its ocentric sibling)
pub const OGRAPHIC_OFFSET: i64 = 1;

/// Largest offset added to the base GIS code (last projection, ographic sibling)
pub const MAX_GIS_CODE_OFFSET: i64 = 83;

/// Nominal radius written for an ographic CRS built on a triaxial figure
pub const TRIAXIAL_OGRAPHIC_NOMINAL_RADIUS: Meter = 1.0;

/// The first publication year for which longitudes follow the IAU sign convention
pub const FIRST_SUPPORTED_YEAR: u16 = 2015;

// -------------------------------------------------------------------------------------------------
// Fixed WKT fragments
// -------------------------------------------------------------------------------------------------

/// Remark closing every geographic CRS
pub const IAU_REPORT_REMARK: &str = "IAU report 2015 : doi://10.1007/s10569-017-9805-5";

/// Name of the prime meridian of every body
pub const PRIME_MERIDIAN_NAME: &str = "Reference_Meridian";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in meters
pub type Meter = f64;
/// NAIF integer identifier of a solar-system body
pub type NaifId = i64;
/// Synthetic integer identifier of a CRS (`naif_id * 100 + offset`)
pub type GisCode = i64;
