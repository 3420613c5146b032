//! Enumerated field values
//!
//! Values without a named variant are kept as `Unknown` so that every code
//! survives a round trip.

use exifmeta_common::utils::convertible_enum;

pub use exifmeta_common::orientation::Orientation;

/// How an enumeration is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumLayout {
    /// One `BYTE`
    Byte,
    /// One `SHORT`
    Short,
    /// One `UNDEFINED` byte
    Undefined,
    /// Code character followed by NULL as `ASCII`
    Ascii,
}

macro_rules! enum_values {
    ($($variant:ident: $repr:ty => $layout:ident),*$(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EnumValue {
            $($variant($variant),)*
        }

        impl EnumValue {
            /// Integer code of the value
            pub fn code(self) -> u16 {
                match self {
                    $(Self::$variant(v) => u16::from(<$repr>::from(v)),)*
                }
            }

            pub fn layout(self) -> EnumLayout {
                match self {
                    $(Self::$variant(_) => EnumLayout::$layout,)*
                }
            }
        }

        impl std::fmt::Display for EnumValue {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant(v) => write!(f, "{v:?}"),)*
                }
            }
        }

        $(
            impl From<$variant> for EnumValue {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

enum_values! {
    Compression: u16 => Short,
    PhotometricInterpretation: u16 => Short,
    Orientation: u16 => Short,
    PlanarConfiguration: u16 => Short,
    YCbCrPositioning: u16 => Short,
    ResolutionUnit: u16 => Short,
    ColorSpace: u16 => Short,
    ExposureProgram: u16 => Short,
    MeteringMode: u16 => Short,
    LightSource: u16 => Short,
    Flash: u16 => Short,
    SensingMethod: u16 => Short,
    FileSource: u8 => Undefined,
    SceneType: u8 => Undefined,
    CustomRendered: u16 => Short,
    ExposureMode: u16 => Short,
    WhiteBalance: u16 => Short,
    SceneCaptureType: u16 => Short,
    GainControl: u16 => Short,
    Contrast: u16 => Short,
    Saturation: u16 => Short,
    Sharpness: u16 => Short,
    SubjectDistanceRange: u16 => Short,
    GpsLatitudeRef: u8 => Ascii,
    GpsLongitudeRef: u8 => Ascii,
    GpsAltitudeRef: u8 => Byte,
    GpsStatus: u8 => Ascii,
    GpsMeasureMode: u8 => Ascii,
    GpsSpeedRef: u8 => Ascii,
    GpsDirectionRef: u8 => Ascii,
    GpsDistanceRef: u8 => Ascii,
    GpsDifferential: u16 => Short,
}

impl EnumValue {
    /// The code is a combination of flags instead of a single value
    pub fn is_bit_field(self) -> bool {
        matches!(self, Self::Flash(_))
    }
}

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Compression {
        Uncompressed = 1,
        Ccitt1D = 2,
        Group3Fax = 3,
        Group4Fax = 4,
        Lzw = 5,
        Jpeg = 6,
        PackBits = 32773,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum PhotometricInterpretation {
        WhiteIsZero = 0,
        BlackIsZero = 1,
        Rgb = 2,
        RgbPalette = 3,
        TransparencyMask = 4,
        Cmyk = 5,
        YCbCr = 6,
        CieLab = 8,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum PlanarConfiguration {
        Chunky = 1,
        Planar = 2,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum YCbCrPositioning {
        Centered = 1,
        CoSited = 2,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ResolutionUnit {
        NoUnit = 1,
        Inches = 2,
        Centimeters = 3,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ColorSpace {
        SRgb = 1,
        Uncalibrated = 0xFFFF,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ExposureProgram {
        NotDefined = 0,
        Manual = 1,
        Normal = 2,
        AperturePriority = 3,
        ShutterPriority = 4,
        Creative = 5,
        Action = 6,
        Portrait = 7,
        Landscape = 8,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum MeteringMode {
        NotKnown = 0,
        Average = 1,
        CenterWeightedAverage = 2,
        Spot = 3,
        MultiSpot = 4,
        Pattern = 5,
        Partial = 6,
        Other = 255,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum LightSource {
        NotKnown = 0,
        Daylight = 1,
        Fluorescent = 2,
        Tungsten = 3,
        Flash = 4,
        FineWeather = 9,
        CloudyWeather = 10,
        Shade = 11,
        DaylightFluorescent = 12,
        DayWhiteFluorescent = 13,
        CoolWhiteFluorescent = 14,
        WhiteFluorescent = 15,
        StandardLightA = 17,
        StandardLightB = 18,
        StandardLightC = 19,
        D55 = 20,
        D65 = 21,
        D75 = 22,
        D50 = 23,
        IsoStudioTungsten = 24,
        OtherLightSource = 255,
    }
);

/// Flash status as combination of flags
///
/// ```
/// # use exifmeta::property::Flash;
/// let flash = Flash::from(0x19);
/// assert!(flash.fired());
/// assert!(flash.contains(Flash::AUTO_MODE));
/// assert!(!flash.contains(Flash::RED_EYE_REDUCTION));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flash(pub u16);

impl Flash {
    pub const DID_NOT_FIRE: Self = Self(0);
    pub const FIRED: Self = Self(0x1);
    pub const RETURN_LIGHT_DETECTED: Self = Self(0x2);
    pub const RETURN_LIGHT_NOT_DETECTED: Self = Self(0x4);
    pub const COMPULSORY_MODE: Self = Self(0x8);
    pub const AUTO_MODE: Self = Self(0x10);
    pub const NO_FLASH_FUNCTION: Self = Self(0x20);
    pub const RED_EYE_REDUCTION: Self = Self(0x40);

    pub fn fired(self) -> bool {
        self.contains(Self::FIRED)
    }

    pub fn contains(self, flags: Self) -> bool {
        self.0 & flags.0 == flags.0
    }
}

impl std::ops::BitOr for Flash {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl From<u16> for Flash {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Flash> for u16 {
    fn from(value: Flash) -> Self {
        value.0
    }
}

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum SensingMethod {
        NotDefined = 1,
        OneChipColorAreaSensor = 2,
        TwoChipColorAreaSensor = 3,
        ThreeChipColorAreaSensor = 4,
        ColorSequentialAreaSensor = 5,
        TriLinearSensor = 7,
        ColorSequentialLinearSensor = 8,
    }
);

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum FileSource {
        /// Digital still camera
        Dsc = 3,
    }
);

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum SceneType {
        DirectlyPhotographed = 1,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum CustomRendered {
        NormalProcess = 0,
        CustomProcess = 1,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ExposureMode {
        Auto = 0,
        Manual = 1,
        AutoBracket = 2,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum WhiteBalance {
        Auto = 0,
        Manual = 1,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum SceneCaptureType {
        Standard = 0,
        Landscape = 1,
        Portrait = 2,
        NightScene = 3,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GainControl {
        NoGain = 0,
        LowGainUp = 1,
        HighGainUp = 2,
        LowGainDown = 3,
        HighGainDown = 4,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Contrast {
        Normal = 0,
        Soft = 1,
        Hard = 2,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Saturation {
        Normal = 0,
        Low = 1,
        High = 2,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Sharpness {
        Normal = 0,
        Soft = 1,
        Hard = 2,
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum SubjectDistanceRange {
        NotKnown = 0,
        Macro = 1,
        CloseView = 2,
        DistantView = 3,
    }
);

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GpsLatitudeRef {
        North = b'N',
        South = b'S',
    }
);

impl GpsLatitudeRef {
    pub fn sign(self) -> f64 {
        if self == Self::South {
            -1.
        } else {
            1.
        }
    }
}

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GpsLongitudeRef {
        East = b'E',
        West = b'W',
    }
);

impl GpsLongitudeRef {
    pub fn sign(self) -> f64 {
        if self == Self::West {
            -1.
        } else {
            1.
        }
    }
}

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GpsAltitudeRef {
        AboveSeaLevel = 0,
        BelowSeaLevel = 1,
    }
);

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GpsStatus {
        MeasurementInProgress = b'A',
        MeasurementInteroperability = b'V',
    }
);

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GpsMeasureMode {
        TwoDimensional = b'2',
        ThreeDimensional = b'3',
    }
);

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GpsSpeedRef {
        KilometersPerHour = b'K',
        MilesPerHour = b'M',
        Knots = b'N',
    }
);

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Reference for track, image direction and destination bearing
    pub enum GpsDirectionRef {
        TrueDirection = b'T',
        MagneticDirection = b'M',
    }
);

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GpsDistanceRef {
        Kilometers = b'K',
        Miles = b'M',
        NauticalMiles = b'N',
    }
);

convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GpsDifferential {
        WithoutCorrection = 0,
        CorrectionApplied = 1,
    }
);
