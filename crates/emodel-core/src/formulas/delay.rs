//! Delay impairment stage
//!
//! Talker echo (Idte), listener echo (Idle) and absolute delay (Idd) combine
//! into the delay impairment factor Id. Two of these formulas are piecewise
//! in G.107: the STMR thresholds at 9 and 20 dB and the 100 ms absolute delay
//! knee. Both arms are reproduced as written, without smoothing.

/// Below this STMR the sidetone impairment enters the echo rating
const TERV_STMR_THRESHOLD: f64 = 9.0;

/// Above this STMR the talker echo and sidetone impairments combine
const IDTE_STMR_THRESHOLD: f64 = 20.0;

/// Absolute delay (ms) up to which Idd is zero
const IDD_DELAY_KNEE_MS: f64 = 100.0;

/// Listener echo rating, Rle = 10.5·(WEPL + 7)·(Tr + 1)^−0.25
pub fn listener_echo_rating(wepl: f64, tr: f64) -> f64 {
    10.5 * (wepl + 7.0) * (tr + 1.0).powf(-0.25)
}

/// Listener echo impairment Idle
pub fn listener_echo_impairment(ro: f64, rle: f64) -> f64 {
    let diff = ro - rle;
    diff / 2.0 + (diff * diff / 4.0 + 169.0).sqrt()
}

/// Roe = −1.5·(No − RLR)
pub fn talker_echo_noise_rating(no: f64, rlr: f64) -> f64 {
    -1.5 * (no - rlr)
}

/// Weighted echo path rating TERV
///
/// The sidetone impairment is folded in for STMR below 9 dB.
pub fn weighted_echo_rating(telr: f64, t: f64, stmr: f64, ist: f64) -> f64 {
    let terv = telr - 40.0 * ((1.0 + t / 10.0) / (1.0 + t / 150.0)).log10() + 6.0 * (-0.3 * t * t).exp();
    if stmr < TERV_STMR_THRESHOLD {
        terv + ist / 2.0
    } else {
        terv
    }
}

/// Re = 80 + 2.5·(TERV − 14)
pub fn talker_echo_rating(terv: f64) -> f64 {
    80.0 + 2.5 * (terv - 14.0)
}

/// Talker echo impairment Idte
///
/// For STMR above 20 dB the result is replaced by √(Idte² + Ist²).
pub fn talker_echo_impairment(roe: f64, re: f64, t: f64, stmr: f64, ist: f64) -> f64 {
    let diff = roe - re;
    let idte = (diff / 2.0 + (diff * diff / 4.0 + 100.0).sqrt() - 1.0) * (1.0 - (-t).exp());
    if stmr > IDTE_STMR_THRESHOLD {
        (idte * idte + ist * ist).sqrt()
    } else {
        idte
    }
}

/// X = log10(Ta/100) / log10(2)
pub fn absolute_delay_x(ta: f64) -> f64 {
    (ta / 100.0).log10() / 2f64.log10()
}

/// Impairment caused by too-long absolute delay (Idd)
///
/// Exactly zero for Ta ≤ 100 ms.
pub fn absolute_delay_impairment(ta: f64, x: f64) -> f64 {
    if ta <= IDD_DELAY_KNEE_MS {
        return 0.0;
    }
    let t1 = (1.0 + x.powf(6.0)).powf(1.0 / 6.0);
    let t2 = (1.0 + (x / 3.0).powf(6.0)).powf(1.0 / 6.0);
    25.0 * (t1 - 3.0 * t2 + 2.0)
}

/// Id = Idte + Idle + Idd
pub fn delay_impairment(idte: f64, idle: f64, idd: f64) -> f64 {
    idte + idle + idd
}
