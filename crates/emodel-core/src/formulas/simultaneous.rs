//! Simultaneous impairment stage
//!
//! Impairments that occur at the same time as the speech signal: too-loud
//! connections (Iolr), non-optimum sidetone (Ist) and quantization distortion
//! (Iq). Their sum is the simultaneous impairment factor Is.

/// Shaping term used by the sidetone impairment, (1 + ((s+a)/b)^c)^(1/c)
fn sidetone_term(stmro: f64, a: f64, b: f64, c: f64) -> f64 {
    (1.0 + ((stmro + a) / b).powf(c)).powf(1.0 / c)
}

/// Optimum sidetone masking rating STMRo, combining sidetone and talker echo
pub fn optimum_sidetone_rating(stmr: f64, t: f64, telr: f64) -> f64 {
    let sidetone = 10f64.powf(-stmr / 10.0);
    let echo = (-t / 4.0).exp() * 10f64.powf(-telr / 10.0);
    -10.0 * (sidetone + echo).log10()
}

/// Impairment caused by non-optimum sidetone (Ist)
pub fn sidetone_impairment(stmro: f64) -> f64 {
    12.0 * sidetone_term(stmro, -13.0, 6.0, 8.0) - 28.0 * sidetone_term(stmro, 1.0, 19.4, 35.0)
        - 13.0 * sidetone_term(stmro, -3.0, 33.0, 13.0)
        + 29.0
}

/// Quantization factor Q derived from the number of qdu
pub fn quantization_factor(qdu: f64) -> f64 {
    37.0 - 15.0 * qdu.log10()
}

/// G = 1.07 + 0.258·Q + 0.0602·Q²
pub fn quantization_g(q: f64) -> f64 {
    1.07 + 0.258 * q + 0.0602 * q * q
}

/// Y = (Ro − 100)/15 + 46/8.4 − G/9
pub fn quantization_y(ro: f64, g: f64) -> f64 {
    (ro - 100.0) / 15.0 + 46.0 / 8.4 - g / 9.0
}

/// Z = 46/30 − G/40
pub fn quantization_z(g: f64) -> f64 {
    46.0 / 30.0 - g / 40.0
}

/// Quantizing distortion impairment Iq
pub fn quantization_impairment(y: f64, z: f64) -> f64 {
    15.0 * (1.0 + 10f64.powf(y) + 10f64.powf(z)).log10()
}

/// Xorl = OLR + 0.2·(64 + No − RLR)
pub fn loudness_x(olr: f64, no: f64, rlr: f64) -> f64 {
    olr + 0.2 * (64.0 + no - rlr)
}

/// Impairment caused by too-low values of OLR (Iolr)
pub fn loudness_impairment(xorl: f64) -> f64 {
    let x = xorl / 8.0;
    20.0 * ((1.0 + x.powf(8.0)).powf(1.0 / 8.0) - x)
}

/// Is = Iolr + Ist + Iq
pub fn simultaneous_impairment(iolr: f64, ist: f64, iq: f64) -> f64 {
    iolr + ist + iq
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_stmro_without_echo_equals_stmr() {
        // Echo contribution is negligible with TELR = 65 dB
        assert_close(optimum_sidetone_rating(15.0, 0.0, 65.0), 15.0, 1e-4);
    }

    #[test]
    fn test_stmro_with_loud_echo_is_lower() {
        let quiet = optimum_sidetone_rating(15.0, 0.0, 65.0);
        let loud = optimum_sidetone_rating(15.0, 0.0, 15.0);
        assert_close(loud, 15.0 - 10.0 * 2f64.log10(), 1e-9);
        assert!(loud < quiet);
    }

    #[test]
    fn test_sidetone_impairment_near_zero_at_optimum() {
        let ist = sidetone_impairment(15.0);
        assert!(ist.abs() < 0.01, "Ist = {}", ist);
    }

    #[test]
    fn test_sidetone_impairment_grows_away_from_optimum() {
        let optimum = sidetone_impairment(15.0);
        assert!(sidetone_impairment(3.0) > optimum + 1.0);
        assert!(sidetone_impairment(30.0) > optimum + 1.0);
    }

    #[test]
    fn test_quantization_chain_single_qdu() {
        let q = quantization_factor(1.0);
        assert_eq!(q, 37.0);
        let g = quantization_g(q);
        assert_close(g, 1.07 + 0.258 * 37.0 + 0.0602 * 37.0 * 37.0, 1e-12);
        let iq = quantization_impairment(quantization_y(94.77, g), quantization_z(g));
        assert!(iq > 0.9 && iq < 1.1, "Iq = {}", iq);
    }

    #[test]
    fn test_more_qdu_means_more_impairment() {
        let iq = |qdu: f64| {
            let g = quantization_g(quantization_factor(qdu));
            quantization_impairment(quantization_y(94.77, g), quantization_z(g))
        };
        assert!(iq(4.0) > iq(1.0));
        assert!(iq(14.0) > iq(4.0));
    }

    #[test]
    fn test_loudness_impairment_small_for_nominal_olr() {
        let xorl = loudness_x(10.0, -61.18, 2.0);
        let iolr = loudness_impairment(xorl);
        assert!(iolr > 0.4 && iolr < 0.5, "Iolr = {}", iolr);
    }

    #[test]
    fn test_simultaneous_impairment_is_sum() {
        assert_eq!(simultaneous_impairment(0.5, -0.25, 1.0), 1.25);
    }
}
