use std::fmt;
use std::str::FromStr;

/// Barcode symbology selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarcodeFormat {
    /// QR Code 2D barcode
    QrCode,
    /// Data Matrix 2D barcode
    DataMatrix,
    /// Aztec 2D barcode
    Aztec,
    /// PDF417 stacked barcode
    Pdf417,
}

impl BarcodeFormat {
    /// Every format the enum knows about
    pub const ALL: [BarcodeFormat; 4] = [
        BarcodeFormat::QrCode,
        BarcodeFormat::DataMatrix,
        BarcodeFormat::Aztec,
        BarcodeFormat::Pdf417,
    ];

    /// Canonical upper-case name (QR_CODE, DATA_MATRIX, ...)
    pub fn name(&self) -> &'static str {
        match self {
            BarcodeFormat::QrCode => "QR_CODE",
            BarcodeFormat::DataMatrix => "DATA_MATRIX",
            BarcodeFormat::Aztec => "AZTEC",
            BarcodeFormat::Pdf417 => "PDF_417",
        }
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BarcodeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "QR" | "QRCODE" => Ok(BarcodeFormat::QrCode),
            "DATAMATRIX" => Ok(BarcodeFormat::DataMatrix),
            "AZTEC" => Ok(BarcodeFormat::Aztec),
            "PDF417" => Ok(BarcodeFormat::Pdf417),
            _ => Err(format!("unknown barcode format '{}'", s)),
        }
    }
}

/// QR error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// Low (~7% recovery capacity)
    #[default]
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ErrorCorrection {
    pub(crate) fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ErrorCorrection::L),
            "M" => Ok(ErrorCorrection::M),
            "Q" => Ok(ErrorCorrection::Q),
            "H" => Ok(ErrorCorrection::H),
            _ => Err(format!("unknown error correction level '{}'", s)),
        }
    }
}
