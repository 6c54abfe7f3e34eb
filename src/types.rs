//! Domain types shared by the tools, the CLI and the TUI.
//!
//! Closed enums only. Each carries its display label so the rendering layer
//! and the report formatter agree on naming.

use serde::Serialize;

// ============================================================================
// TOOLS
// ============================================================================

/// The independent tools reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Uuid,
    Hash,
    Color,
}

impl Tool {
    /// All tools, in menu order.
    pub const ALL: [Tool; 3] = [Tool::Uuid, Tool::Hash, Tool::Color];

    /// Short name used in the menu and the breadcrumb.
    pub const fn label(self) -> &'static str {
        match self {
            Tool::Uuid => "UUID",
            Tool::Hash => "Hash",
            Tool::Color => "Color",
        }
    }

    /// One-line description shown under the menu entry.
    pub const fn description(self) -> &'static str {
        match self {
            Tool::Uuid => "generate and format UUID",
            Tool::Hash => "calculate hash",
            Tool::Color => "select terminal 256 color",
        }
    }
}

// ============================================================================
// HASHING
// ============================================================================

/// Digest algorithms offered by the hash tool, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HashAlgorithm {
    #[serde(rename = "md5")]
    Md5,
    #[serde(rename = "sha1")]
    Sha1,
    #[serde(rename = "sha224")]
    Sha224,
    #[serde(rename = "sha256")]
    Sha256,
    #[serde(rename = "sha384")]
    Sha384,
    #[serde(rename = "sha512/224")]
    Sha512_224,
    #[serde(rename = "sha512/256")]
    Sha512_256,
    #[serde(rename = "sha512")]
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 8] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512_224,
        HashAlgorithm::Sha512_256,
        HashAlgorithm::Sha512,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512_224 => "SHA-512/224",
            HashAlgorithm::Sha512_256 => "SHA-512/256",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Length of the hex digest in characters (two per output byte).
    pub const fn hex_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 => 56,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha512_256 => 64,
            HashAlgorithm::Sha384 => 96,
            HashAlgorithm::Sha512 => 128,
        }
    }
}

// ============================================================================
// COLOR
// ============================================================================

/// Color-difference formula used to rank the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Euclidean distance in raw sRGB.
    Rgb,
    /// Euclidean distance in CIELAB.
    Cie76,
    /// CIE 1994 weighted difference (graphic arts constants).
    Cie94,
    /// CIEDE2000.
    Ciede2000,
}

impl DistanceMetric {
    pub const ALL: [DistanceMetric; 4] = [
        DistanceMetric::Rgb,
        DistanceMetric::Cie76,
        DistanceMetric::Cie94,
        DistanceMetric::Ciede2000,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DistanceMetric::Rgb => "RGB",
            DistanceMetric::Cie76 => "CIE76",
            DistanceMetric::Cie94 => "CIE94",
            DistanceMetric::Ciede2000 => "CIEDE2000",
        }
    }
}

// ============================================================================
// UUID
// ============================================================================

/// UUID versions the generator supports. Only random (v4) today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UuidVersion {
    #[default]
    V4,
}

impl UuidVersion {
    pub const ALL: [UuidVersion; 1] = [UuidVersion::V4];

    pub const fn label(self) -> &'static str {
        match self {
            UuidVersion::V4 => "Version 4",
        }
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for the non-interactive subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
