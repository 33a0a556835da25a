//! Equipment impairment and the final rating formula

/// Effective equipment impairment factor Ie,eff
///
/// Extends the codec's Ie with random or bursty packet loss:
/// Ie,eff = Ie + (95 − Ie)·Ppl / (Ppl/BurstR + Bpl).
pub fn effective_equipment_impairment(ie: f64, ppl: f64, burst_r: f64, bpl: f64) -> f64 {
    ie + (95.0 - ie) * (ppl / (ppl / burst_r + bpl))
}

/// R = Ro − Is − Id − Ie,eff + A
pub fn rating(ro: f64, is: f64, id: f64, ie_eff: f64, a: f64) -> f64 {
    ro - is - id - ie_eff + a
}
