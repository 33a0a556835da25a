//! R-factor engine
//!
//! Evaluates the E-model as one flat pass over named bindings, each computed
//! once from the input record or from bindings above it. The engine is a pure
//! function: no I/O, no logging, no shared state. Arithmetic outside a
//! formula's domain (for example `Qdu < 0`) is not an error; the resulting
//! NaN or infinity flows through to R.

use serde::Serialize;

use crate::formulas::{delay, equipment, noise, simultaneous};
use crate::params::InputParameters;

/// Every quantity produced while rating one set of parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingBreakdown {
    #[serde(rename = "STMRo")]
    pub stmro: f64,
    #[serde(rename = "Ist")]
    pub ist: f64,
    #[serde(rename = "OLR")]
    pub olr: f64,
    #[serde(rename = "Nos")]
    pub nos: f64,
    #[serde(rename = "Pre")]
    pub pre: f64,
    #[serde(rename = "Nor")]
    pub nor: f64,
    #[serde(rename = "Nfo")]
    pub nfo: f64,
    #[serde(rename = "No")]
    pub no: f64,
    #[serde(rename = "Ro")]
    pub ro: f64,
    #[serde(rename = "Q")]
    pub q: f64,
    #[serde(rename = "G")]
    pub g: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
    #[serde(rename = "Iq")]
    pub iq: f64,
    #[serde(rename = "Xorl")]
    pub xorl: f64,
    #[serde(rename = "Iolr")]
    pub iolr: f64,
    /// Simultaneous impairment factor
    #[serde(rename = "Is")]
    pub is: f64,
    #[serde(rename = "Rle")]
    pub rle: f64,
    #[serde(rename = "Idle")]
    pub idle: f64,
    #[serde(rename = "Roe")]
    pub roe: f64,
    #[serde(rename = "TERV")]
    pub terv: f64,
    #[serde(rename = "Re")]
    pub re: f64,
    #[serde(rename = "Idte")]
    pub idte: f64,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Idd")]
    pub idd: f64,
    /// Delay impairment factor
    #[serde(rename = "Id")]
    pub id: f64,
    /// Effective equipment impairment factor
    #[serde(rename = "Ie_eff")]
    pub ie_eff: f64,
    /// Transmission rating factor
    #[serde(rename = "R")]
    pub r: f64,
}

impl RatingBreakdown {
    /// Quantities paired with their G.107 symbols, in evaluation order
    pub fn entries(&self) -> [(&'static str, f64); 28] {
        [
            ("STMRo", self.stmro),
            ("Ist", self.ist),
            ("OLR", self.olr),
            ("Nos", self.nos),
            ("Pre", self.pre),
            ("Nor", self.nor),
            ("Nfo", self.nfo),
            ("No", self.no),
            ("Ro", self.ro),
            ("Q", self.q),
            ("G", self.g),
            ("Y", self.y),
            ("Z", self.z),
            ("Iq", self.iq),
            ("Xorl", self.xorl),
            ("Iolr", self.iolr),
            ("Is", self.is),
            ("Rle", self.rle),
            ("Idle", self.idle),
            ("Roe", self.roe),
            ("TERV", self.terv),
            ("Re", self.re),
            ("Idte", self.idte),
            ("X", self.x),
            ("Idd", self.idd),
            ("Id", self.id),
            ("Ie_eff", self.ie_eff),
            ("R", self.r),
        ]
    }
}

/// Compute the transmission rating factor R
pub fn compute(input: &InputParameters) -> f64 {
    compute_breakdown(input).r
}

/// Compute R together with every intermediate quantity
pub fn compute_breakdown(input: &InputParameters) -> RatingBreakdown {
    let p = input;

    // Sidetone
    let stmro = simultaneous::optimum_sidetone_rating(p.stmr, p.t, p.telr);
    let ist = simultaneous::sidetone_impairment(stmro);

    // Noise
    let olr = noise::overall_loudness_rating(p.slr, p.rlr);
    let nos = noise::send_room_noise(p.ps, p.slr, p.ds, olr);
    let nfo = noise::receive_noise_floor(p.nfor, p.rlr);
    let pre = noise::effective_receive_room_noise(p.pr, p.lstr);
    let nor = noise::receive_room_noise(p.rlr, pre);
    let no = noise::total_noise(p.nc, nos, nor, nfo);
    let ro = noise::basic_signal_to_noise(p.slr, no);

    // Simultaneous impairment
    let q = simultaneous::quantization_factor(p.qdu);
    let g = simultaneous::quantization_g(q);
    let y = simultaneous::quantization_y(ro, g);
    let z = simultaneous::quantization_z(g);
    let iq = simultaneous::quantization_impairment(y, z);
    let xorl = simultaneous::loudness_x(olr, no, p.rlr);
    let iolr = simultaneous::loudness_impairment(xorl);
    let is = simultaneous::simultaneous_impairment(iolr, ist, iq);

    // Delay impairment
    let rle = delay::listener_echo_rating(p.wepl, p.tr);
    let idle = delay::listener_echo_impairment(ro, rle);
    let roe = delay::talker_echo_noise_rating(no, p.rlr);
    let terv = delay::weighted_echo_rating(p.telr, p.t, p.stmr, ist);
    let re = delay::talker_echo_rating(terv);
    let idte = delay::talker_echo_impairment(roe, re, p.t, p.stmr, ist);
    let x = delay::absolute_delay_x(p.ta);
    let idd = delay::absolute_delay_impairment(p.ta, x);
    let id = delay::delay_impairment(idte, idle, idd);

    // Equipment impairment and advantage
    let ie_eff = equipment::effective_equipment_impairment(p.ie, p.ppl, p.burst_r, p.bpl);
    let r = equipment::rating(ro, is, id, ie_eff, p.a);

    RatingBreakdown {
        stmro,
        ist,
        olr,
        nos,
        pre,
        nor,
        nfo,
        no,
        ro,
        q,
        g,
        y,
        z,
        iq,
        xorl,
        iolr,
        is,
        rle,
        idle,
        roe,
        terv,
        re,
        idte,
        x,
        idd,
        id,
        ie_eff,
        r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_R: f64 = 93.20620772327571;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_default_parameters_rate_93_2() {
        assert_close(compute(&InputParameters::g107_defaults()), DEFAULT_R);
    }

    #[test]
    fn test_default_breakdown_stages() {
        let b = compute_breakdown(&InputParameters::g107_defaults());
        assert_close(b.no, -61.17921438624169);
        assert_close(b.ro, 94.76882157936254);
        assert_close(b.is, 1.4135681311494044);
        assert_close(b.id, 0.14904572493742307);
        assert_eq!(b.ie_eff, 0.0);
        assert_eq!(b.idd, 0.0);
        assert_eq!(b.r, b.ro - b.is - b.id - b.ie_eff);
    }

    #[test]
    fn test_method_matches_free_function() {
        let p = InputParameters::g107_defaults();
        assert_eq!(p.compute().to_bits(), compute(&p).to_bits());
    }

    #[test]
    fn test_entries_end_with_r() {
        let b = compute_breakdown(&InputParameters::g107_defaults());
        let entries = b.entries();
        assert_eq!(entries[0].0, "STMRo");
        assert_eq!(entries[entries.len() - 1], ("R", b.r));
    }

    #[test]
    fn test_breakdown_serializes_with_symbols() {
        let b = compute_breakdown(&InputParameters::g107_defaults());
        let value = serde_json::to_value(b).unwrap();
        assert!(value.get("Ie_eff").is_some());
        assert!(value.get("STMRo").is_some());
        assert_eq!(value.as_object().unwrap().len(), 28);
    }
}
