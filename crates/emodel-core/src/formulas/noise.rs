//! Noise stage: aggregation of circuit, room and floor noise into No, and the
//! basic signal-to-noise ratio Ro.

/// Power sum of levels given in dB
fn power_sum_db(levels: &[f64]) -> f64 {
    10.0 * levels.iter().map(|l| 10f64.powf(l / 10.0)).sum::<f64>().log10()
}

/// Overall loudness rating, OLR = SLR + RLR
pub fn overall_loudness_rating(slr: f64, rlr: f64) -> f64 {
    slr + rlr
}

/// Equivalent circuit noise caused by room noise at the send side (Nos)
pub fn send_room_noise(ps: f64, slr: f64, ds: f64, olr: f64) -> f64 {
    let term = ps - olr - ds - 14.0;
    ps - slr - ds - 100.0 + 0.004 * term * term
}

/// Room noise at the receive side raised by the listener sidetone path (Pre)
pub fn effective_receive_room_noise(pr: f64, lstr: f64) -> f64 {
    pr + 10.0 * (1.0 + 10f64.powf((10.0 - lstr) / 10.0)).log10()
}

/// Equivalent circuit noise caused by room noise at the receive side (Nor)
pub fn receive_room_noise(rlr: f64, pre: f64) -> f64 {
    let term = pre - 35.0;
    rlr - 121.0 + pre + 0.008 * term * term
}

/// Noise floor at the receive side referred to the 0 dBr point (Nfo)
pub fn receive_noise_floor(nfor: f64, rlr: f64) -> f64 {
    nfor + rlr
}

/// Total noise power No, the power sum of Nc, Nos, Nor and Nfo
pub fn total_noise(nc: f64, nos: f64, nor: f64, nfo: f64) -> f64 {
    power_sum_db(&[nc, nos, nor, nfo])
}

/// Basic signal-to-noise ratio, Ro = 15 − 1.5·(SLR + No)
pub fn basic_signal_to_noise(slr: f64, no: f64) -> f64 {
    15.0 - 1.5 * (slr + no)
}
