//! Transmission parameters fed into the E-model
//!
//! [`InputParameters`] holds the twenty parameters of ITU-T G.107. Every field
//! is required when decoding; there is no implicit default. The serialized
//! names are the symbols used by the Recommendation (`SLR`, `BurstR`, ...).

use serde::{Deserialize, Serialize};

/// One complete set of E-model input parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    /// Send loudness rating (dB)
    #[serde(rename = "SLR")]
    pub slr: f64,
    /// Receive loudness rating (dB)
    #[serde(rename = "RLR")]
    pub rlr: f64,
    /// Sidetone masking rating (dB)
    #[serde(rename = "STMR")]
    pub stmr: f64,
    /// Listener sidetone rating (dB)
    #[serde(rename = "LSTR")]
    pub lstr: f64,
    /// D-value of the telephone, send side
    #[serde(rename = "Ds")]
    pub ds: f64,
    /// Talker echo loudness rating (dB)
    #[serde(rename = "TELR")]
    pub telr: f64,
    /// Weighted echo path loss (dB)
    #[serde(rename = "WEPL")]
    pub wepl: f64,
    /// Mean one-way delay of the echo path (ms)
    #[serde(rename = "T")]
    pub t: f64,
    /// Round-trip delay in a 4-wire loop (ms)
    #[serde(rename = "Tr")]
    pub tr: f64,
    /// Absolute delay in echo-free connections (ms)
    #[serde(rename = "Ta")]
    pub ta: f64,
    /// Number of quantization distortion units
    #[serde(rename = "Qdu")]
    pub qdu: f64,
    /// Equipment impairment factor
    #[serde(rename = "Ie")]
    pub ie: f64,
    /// Packet-loss robustness factor
    #[serde(rename = "Bpl")]
    pub bpl: f64,
    /// Random packet-loss probability (%)
    #[serde(rename = "Ppl")]
    pub ppl: f64,
    /// Burst ratio
    #[serde(rename = "BurstR")]
    pub burst_r: f64,
    /// Circuit noise referred to the 0 dBr point (dBm0p)
    #[serde(rename = "Nc")]
    pub nc: f64,
    /// Noise floor at the receive side (dBmp)
    #[serde(rename = "Nfor")]
    pub nfor: f64,
    /// Room noise at the send side (dB(A))
    #[serde(rename = "Ps")]
    pub ps: f64,
    /// Room noise at the receive side (dB(A))
    #[serde(rename = "Pr")]
    pub pr: f64,
    /// Advantage factor
    #[serde(rename = "A")]
    pub a: f64,
}

impl InputParameters {
    /// The default parameter set of G.107, Table 3
    ///
    /// With these values the model yields R ≈ 93.2, the reference rating of
    /// an ideal narrowband connection. `Bpl` is 4.3, the robustness value
    /// listed for G.711 without packet-loss concealment.
    pub fn g107_defaults() -> Self {
        Self {
            slr: 8.0,
            rlr: 2.0,
            stmr: 15.0,
            lstr: 18.0,
            ds: 3.0,
            telr: 65.0,
            wepl: 110.0,
            t: 0.0,
            tr: 0.0,
            ta: 0.0,
            qdu: 1.0,
            ie: 0.0,
            bpl: 4.3,
            ppl: 0.0,
            burst_r: 1.0,
            nc: -70.0,
            nfor: -64.0,
            ps: 35.0,
            pr: 35.0,
            a: 0.0,
        }
    }

    /// Compute the transmission rating R for these parameters
    pub fn compute(&self) -> f64 {
        crate::engine::compute(self)
    }

    /// Every field paired with its serialized name, in declaration order
    pub fn fields(&self) -> [(&'static str, f64); 20] {
        [
            ("SLR", self.slr),
            ("RLR", self.rlr),
            ("STMR", self.stmr),
            ("LSTR", self.lstr),
            ("Ds", self.ds),
            ("TELR", self.telr),
            ("WEPL", self.wepl),
            ("T", self.t),
            ("Tr", self.tr),
            ("Ta", self.ta),
            ("Qdu", self.qdu),
            ("Ie", self.ie),
            ("Bpl", self.bpl),
            ("Ppl", self.ppl),
            ("BurstR", self.burst_r),
            ("Nc", self.nc),
            ("Nfor", self.nfor),
            ("Ps", self.ps),
            ("Pr", self.pr),
            ("A", self.a),
        ]
    }
}
