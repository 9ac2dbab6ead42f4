use crate::utils::round_to;

/// Which out-of-range boundary ticks to drop from a generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipRange {
    Low,
    High,
    Both,
    #[default]
    Neither,
}

/// Generate evenly spaced, round-valued axis ticks covering a numeric range.
///
/// The tick unit is the "nicest" multiple of a power of ten (1, 2, 5, or 10
/// times the base) near `span / target_tick_count`, so the sequence lands on
/// values like `[10, 20, .., 70]` rather than `[14, 24.6, ..]`. The sequence
/// starts at or below `range[0]` and ends at or above `range[1]`; `clip`
/// drops the boundary ticks that overshoot.
pub fn pretty_ticks(range: [f64; 2], clip: ClipRange, target_tick_count: usize) -> Vec<f64> {
    let span = (range[0] - range[1]).abs();
    if !span.is_finite() || span <= 0.0 {
        return vec![range[0]];
    }
    let target = target_tick_count.max(1) as f64;
    let min_n = target / 3.0;
    let shrink_sml = 0.75;
    let high_u_bias = 1.5;
    let u5_bias = 0.5 + 1.5 * high_u_bias;

    let mut cell = span / target;
    if span.log10() < -2.0 {
        cell = span * shrink_sml / min_n;
    }

    let base = 10f64.powf(cell.log10().floor());
    let base_digits = if base < 1.0 {
        base.log10().round().abs() as u32
    } else {
        0
    };

    let mut unit = base;
    if (2.0 * base) - cell < high_u_bias * (cell - unit) {
        unit = 2.0 * base;
        if (5.0 * base) - cell < u5_bias * (cell - unit) {
            unit = 5.0 * base;
            if (10.0 * base) - cell < high_u_bias * (cell - unit) {
                unit = 10.0 * base;
            }
        }
    }

    let mut ticks = Vec::new();
    let mut tick = round_to((range[0] / unit).floor() * unit, base_digits);
    while tick < range[1] {
        ticks.push(tick);
        tick += unit;
        if base_digits > 0 {
            tick = round_to(tick, base_digits);
        }
    }
    ticks.push(tick);

    if matches!(clip, ClipRange::Low | ClipRange::Both)
        && ticks.first().is_some_and(|first| *first < range[0])
    {
        ticks.remove(0);
    }
    if matches!(clip, ClipRange::High | ClipRange::Both)
        && ticks.last().is_some_and(|last| *last > range[1])
    {
        ticks.pop();
    }
    ticks
}
