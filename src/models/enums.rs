//! Enumeration types for the USPS APIs.
//!
//! This module contains the carrier-defined code tables used in request
//! parameters: mail classes, price types, rate indicators, processing
//! categories, extra services and related codes. Serde renames match the
//! wire spellings exactly.

use serde::{Deserialize, Serialize};

/// Mail class identifying the product a price or label applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MailClass {
    /// Priority Mail Express
    PriorityMailExpress,
    /// Priority Mail
    PriorityMail,
    /// First-Class Mail (letters and flats)
    #[serde(rename = "FIRST-CLASS_MAIL")]
    FirstClassMail,
    /// First-Class Package Service
    #[serde(rename = "FIRST-CLASS_PACKAGE_SERVICE")]
    FirstClassPackageService,
    /// USPS Ground Advantage
    UspsGroundAdvantage,
    /// USPS Ground Advantage Return Service
    UspsGroundAdvantageReturnService,
    /// Parcel Select
    ParcelSelect,
    /// Parcel Select Lightweight
    ParcelSelectLightweight,
    /// USPS Connect Local
    UspsConnectLocal,
    /// USPS Connect Mail
    UspsConnectMail,
    /// USPS Connect Next Day
    UspsConnectNextDay,
    /// USPS Connect Regional
    UspsConnectRegional,
    /// USPS Connect Same Day
    UspsConnectSameDay,
    /// USPS Retail Ground
    UspsRetailGround,
    /// Bound Printed Matter
    BoundPrintedMatter,
    /// Library Mail
    LibraryMail,
    /// Media Mail
    MediaMail,
    /// Priority Mail Express International
    PriorityMailExpressInternational,
    /// Priority Mail International
    PriorityMailInternational,
    /// First-Class Package International Service
    #[serde(rename = "FIRST-CLASS_PACKAGE_INTERNATIONAL_SERVICE")]
    FirstClassPackageInternationalService,
    /// Global Express Guaranteed
    GlobalExpressGuaranteed,
    /// Wildcard accepted by the list/total rate searches
    All,
    /// Unknown mail class (forward-compatibility)
    #[serde(other)]
    Unknown,
}

impl MailClass {
    /// Returns `true` if this class is an international product.
    pub fn is_international(&self) -> bool {
        matches!(
            self,
            MailClass::PriorityMailExpressInternational
                | MailClass::PriorityMailInternational
                | MailClass::FirstClassPackageInternationalService
                | MailClass::GlobalExpressGuaranteed
        )
    }
}

/// Pricing tier to quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceType {
    /// Retail (post office counter) pricing
    Retail,
    /// Commercial (online/shipping partner) pricing
    Commercial,
    /// Negotiated contract pricing
    Contract,
}

/// Physical processing category of the mailpiece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingCategory {
    /// Machinable letters
    Letters,
    /// Large envelopes and flats
    Flats,
    /// Parcels
    Parcels,
    /// Machinable parcels
    Machinable,
    /// Nonstandard pieces
    Nonstandard,
}

/// Payment account type used when quoting contract prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentAccountType {
    /// Enterprise Payment System account
    Eps,
    /// Permit imprint account
    Permit,
    /// Postage meter account
    Meter,
    /// Trust account
    Trust,
}

/// Destination entry facility type for destination-entered volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationEntryFacilityType {
    /// No destination entry
    #[default]
    None,
    /// Destination Network Distribution Center
    DestinationNetworkDistributionCenter,
    /// Destination Sectional Center Facility
    DestinationSectionalCenterFacility,
    /// Destination Delivery Unit
    DestinationDeliveryUnit,
    /// Destination Service Hub
    DestinationServiceHub,
}

/// Rate indicator narrowing a mail class to one priced configuration.
///
/// Two-character wire codes as published in the carrier's price tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateIndicator {
    // Digit-based indicators
    /// 3-digit ZIP prefix sortation
    #[serde(rename = "3D")]
    ThreeDigit,
    /// 3-digit dimensional rectangular
    #[serde(rename = "3N")]
    ThreeDigitDimensionalRect,
    /// 3-digit dimensional nonrectangular
    #[serde(rename = "3R")]
    ThreeDigitDimensionalNonrect,
    /// 5-digit ZIP sortation
    #[serde(rename = "5D")]
    FiveDigit,

    // Basic indicators
    /// Basic
    #[serde(rename = "BA")]
    Basic,
    /// Mixed NDC
    #[serde(rename = "BB")]
    MixedNdc,
    /// NDC
    #[serde(rename = "BM")]
    Ndc,

    // Cubic pricing tiers
    /// Cubic pricing tier 1
    #[serde(rename = "C1")]
    CubicTier1,
    /// Cubic pricing tier 2
    #[serde(rename = "C2")]
    CubicTier2,
    /// Cubic pricing tier 3
    #[serde(rename = "C3")]
    CubicTier3,
    /// Cubic pricing tier 4
    #[serde(rename = "C4")]
    CubicTier4,
    /// Cubic pricing tier 5
    #[serde(rename = "C5")]
    CubicTier5,
    /// Cubic parcel
    #[serde(rename = "CP")]
    CubicParcel,

    // USPS Connect
    /// USPS Connect Local mail
    #[serde(rename = "CM")]
    ConnectLocalMail,
    /// USPS Connect Local single piece
    #[serde(rename = "LC")]
    ConnectLocalSinglePiece,
    /// USPS Connect Local flat rate box
    #[serde(rename = "LF")]
    ConnectLocalFlatRateBox,
    /// USPS Connect Local large flat rate bag
    #[serde(rename = "LL")]
    ConnectLocalLargeFlatRateBag,
    /// USPS Connect Local oversized
    #[serde(rename = "LO")]
    ConnectLocalOversized,
    /// USPS Connect Local small flat rate bag
    #[serde(rename = "LS")]
    ConnectLocalSmallFlatRateBag,

    // Distribution centers
    /// NDC entry
    #[serde(rename = "DC")]
    NdcDc,
    /// SCF entry
    #[serde(rename = "DE")]
    Scf,
    /// 5-digit destination entry
    #[serde(rename = "DF")]
    FiveDigitDf,

    // Dimensional
    /// Dimensional nonrectangular
    #[serde(rename = "DN")]
    DimensionalNonrectangular,
    /// Dimensional rectangular
    #[serde(rename = "DR")]
    DimensionalRectangular,
    /// SCF dimensional nonrectangular
    #[serde(rename = "SN")]
    ScfDimensionalNonrectangular,
    /// SCF dimensional rectangular
    #[serde(rename = "SR")]
    ScfDimensionalRectangular,

    // Priority Mail Express
    /// Express flat rate envelope
    #[serde(rename = "E4")]
    ExpressFlatRateEnvelope,
    /// Express legal flat rate envelope
    #[serde(rename = "E6")]
    ExpressLegalFlatRateEnvelope,
    /// Express legal flat rate envelope, Sunday/holiday
    #[serde(rename = "E7")]
    ExpressLegalFlatRateEnvSunday,
    /// Express single piece
    #[serde(rename = "PA")]
    ExpressSinglePiece,

    // Flat rate
    /// Legal flat rate envelope
    #[serde(rename = "FA")]
    LegalFlatRateEnvelope,
    /// Medium flat rate box
    #[serde(rename = "FB")]
    MediumFlatRateBox,
    /// Flat rate envelope
    #[serde(rename = "FE")]
    FlatRateEnvelope,
    /// Padded flat rate envelope
    #[serde(rename = "FP")]
    PaddedFlatRateEnvelope,
    /// Small flat rate box
    #[serde(rename = "FS")]
    SmallFlatRateBox,
    /// Large flat rate box
    #[serde(rename = "PL")]
    LargeFlatRateBox,
    /// Large flat rate box, APO/FPO/DPO
    #[serde(rename = "PM")]
    LargeFlatRateBoxApo,
    /// Small flat rate bag
    #[serde(rename = "SB")]
    SmallFlatRateBag,

    // Tray and pallet boxes
    /// Full tray box
    #[serde(rename = "O1")]
    FullTrayBox,
    /// Half tray box
    #[serde(rename = "O2")]
    HalfTrayBox,
    /// EMM tray box
    #[serde(rename = "O3")]
    EmmTrayBox,
    /// Flat tub tray box
    #[serde(rename = "O4")]
    FlatTubTrayBox,
    /// Surface transported pallet
    #[serde(rename = "O5")]
    SurfaceTransportedPallet,
    /// Full pallet box
    #[serde(rename = "O6")]
    FullPalletBox,
    /// Half pallet box
    #[serde(rename = "O7")]
    HalfPalletBox,

    // Cubic soft pack tiers
    /// Cubic soft pack tier 1
    #[serde(rename = "P5")]
    CubicSoftPackTier1,
    /// Cubic soft pack tier 2
    #[serde(rename = "P6")]
    CubicSoftPackTier2,
    /// Cubic soft pack tier 3
    #[serde(rename = "P7")]
    CubicSoftPackTier3,
    /// Cubic soft pack tier 4
    #[serde(rename = "P8")]
    CubicSoftPackTier4,
    /// Cubic soft pack tier 5
    #[serde(rename = "P9")]
    CubicSoftPackTier5,
    /// Cubic soft pack tier 6
    #[serde(rename = "Q6")]
    CubicSoftPackTier6,
    /// Cubic soft pack tier 7
    #[serde(rename = "Q7")]
    CubicSoftPackTier7,
    /// Cubic soft pack tier 8
    #[serde(rename = "Q8")]
    CubicSoftPackTier8,
    /// Cubic soft pack tier 9
    #[serde(rename = "Q9")]
    CubicSoftPackTier9,
    /// Cubic soft pack tier 10
    #[serde(rename = "Q0")]
    CubicSoftPackTier10,

    // Other
    /// Non-presorted
    #[serde(rename = "NP")]
    NonPresorted,
    /// Oversized
    #[serde(rename = "OS")]
    Oversized,
    /// Presorted
    #[serde(rename = "PR")]
    Presorted,
    /// Single piece
    #[serde(rename = "SP")]
    SinglePiece,
}

impl RateIndicator {
    /// Returns `true` for flat-rate packaging indicators.
    pub fn is_flat_rate(&self) -> bool {
        matches!(
            self,
            RateIndicator::LegalFlatRateEnvelope
                | RateIndicator::MediumFlatRateBox
                | RateIndicator::FlatRateEnvelope
                | RateIndicator::PaddedFlatRateEnvelope
                | RateIndicator::SmallFlatRateBox
                | RateIndicator::LargeFlatRateBox
                | RateIndicator::LargeFlatRateBoxApo
                | RateIndicator::SmallFlatRateBag
                | RateIndicator::ExpressFlatRateEnvelope
                | RateIndicator::ExpressLegalFlatRateEnvelope
                | RateIndicator::ExpressLegalFlatRateEnvSunday
                | RateIndicator::ConnectLocalFlatRateBox
                | RateIndicator::ConnectLocalLargeFlatRateBag
                | RateIndicator::ConnectLocalSmallFlatRateBag
        )
    }

    /// Returns `true` for cubic-priced indicators.
    pub fn is_cubic(&self) -> bool {
        matches!(
            self,
            RateIndicator::CubicTier1
                | RateIndicator::CubicTier2
                | RateIndicator::CubicTier3
                | RateIndicator::CubicTier4
                | RateIndicator::CubicTier5
                | RateIndicator::CubicParcel
                | RateIndicator::CubicSoftPackTier1
                | RateIndicator::CubicSoftPackTier2
                | RateIndicator::CubicSoftPackTier3
                | RateIndicator::CubicSoftPackTier4
                | RateIndicator::CubicSoftPackTier5
                | RateIndicator::CubicSoftPackTier6
                | RateIndicator::CubicSoftPackTier7
                | RateIndicator::CubicSoftPackTier8
                | RateIndicator::CubicSoftPackTier9
                | RateIndicator::CubicSoftPackTier10
        )
    }
}

/// Extra service, identified by its numeric carrier code on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ExtraService {
    /// USPS Label Delivery service
    LabelDelivery = 415,
    /// Hazardous materials
    HazardousMaterials = 857,
    /// Certified Mail
    CertifiedMail = 910,
    /// Certified Mail restricted delivery
    CertifiedMailRestrictedDelivery = 911,
    /// Certified Mail adult signature required
    CertifiedMailAdultSignatureRequired = 912,
    /// Certified Mail adult signature restricted delivery
    CertifiedMailAdultSignatureRestrictedDelivery = 913,
    /// Collect on Delivery
    CollectOnDelivery = 915,
    /// Collect on Delivery restricted delivery
    CollectOnDeliveryRestrictedDelivery = 917,
    /// USPS Tracking (electronic)
    UspsTracking = 920,
    /// Signature Confirmation
    SignatureConfirmation = 921,
    /// Adult signature required
    AdultSignatureRequired = 922,
    /// Adult signature restricted delivery
    AdultSignatureRestrictedDelivery = 923,
    /// Signature Confirmation restricted delivery
    SignatureConfirmationRestrictedDelivery = 924,
    /// Priority Mail Express merchandise insurance
    PriorityMailExpressMerchandiseInsurance = 925,
    /// Insurance up to $500
    Insurance = 930,
    /// Insurance above $500
    InsuranceAbove500 = 931,
    /// Insurance restricted delivery
    InsuranceRestrictedDelivery = 934,
    /// Registered Mail
    RegisteredMail = 940,
    /// Registered Mail restricted delivery
    RegisteredMailRestrictedDelivery = 941,
    /// Return receipt
    ReturnReceipt = 955,
    /// Return receipt, electronic
    ReturnReceiptElectronic = 957,
    /// Signature requested (Priority Mail Express)
    SignatureRequested = 981,
    /// Sunday/holiday delivery (Priority Mail Express)
    SundayHolidayDelivery = 991,
}

impl ExtraService {
    /// The numeric wire code for this service.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Returns `true` if this service requires a signature at delivery.
    pub fn requires_signature(&self) -> bool {
        matches!(
            self,
            ExtraService::CertifiedMailAdultSignatureRequired
                | ExtraService::CertifiedMailAdultSignatureRestrictedDelivery
                | ExtraService::SignatureConfirmation
                | ExtraService::AdultSignatureRequired
                | ExtraService::AdultSignatureRestrictedDelivery
                | ExtraService::SignatureConfirmationRestrictedDelivery
                | ExtraService::SignatureRequested
        )
    }
}

impl From<ExtraService> for u16 {
    fn from(service: ExtraService) -> u16 {
        service as u16
    }
}

impl TryFrom<u16> for ExtraService {
    type Error = String;

    fn try_from(code: u16) -> std::result::Result<Self, Self::Error> {
        match code {
            415 => Ok(ExtraService::LabelDelivery),
            857 => Ok(ExtraService::HazardousMaterials),
            910 => Ok(ExtraService::CertifiedMail),
            911 => Ok(ExtraService::CertifiedMailRestrictedDelivery),
            912 => Ok(ExtraService::CertifiedMailAdultSignatureRequired),
            913 => Ok(ExtraService::CertifiedMailAdultSignatureRestrictedDelivery),
            915 => Ok(ExtraService::CollectOnDelivery),
            917 => Ok(ExtraService::CollectOnDeliveryRestrictedDelivery),
            920 => Ok(ExtraService::UspsTracking),
            921 => Ok(ExtraService::SignatureConfirmation),
            922 => Ok(ExtraService::AdultSignatureRequired),
            923 => Ok(ExtraService::AdultSignatureRestrictedDelivery),
            924 => Ok(ExtraService::SignatureConfirmationRestrictedDelivery),
            925 => Ok(ExtraService::PriorityMailExpressMerchandiseInsurance),
            930 => Ok(ExtraService::Insurance),
            931 => Ok(ExtraService::InsuranceAbove500),
            934 => Ok(ExtraService::InsuranceRestrictedDelivery),
            940 => Ok(ExtraService::RegisteredMail),
            941 => Ok(ExtraService::RegisteredMailRestrictedDelivery),
            955 => Ok(ExtraService::ReturnReceipt),
            957 => Ok(ExtraService::ReturnReceiptElectronic),
            981 => Ok(ExtraService::SignatureRequested),
            991 => Ok(ExtraService::SundayHolidayDelivery),
            other => Err(format!("unknown extra service code: {other}")),
        }
    }
}
