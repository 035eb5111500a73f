use smallvec::SmallVec;

use crate::core::{Lane, PositionedBar};

/// Assigns overlap-free lanes to bars sharing one window.
///
/// Bars are visited in a stable order (start column, then input index) and
/// each takes the lowest lane whose last bar ends before it starts. Two
/// bars whose column spans overlap never share a lane. The output is indexed
/// like the input.
#[must_use]
pub fn assign_lanes(bars: &[PositionedBar]) -> Vec<Lane> {
    let mut order: Vec<usize> = (0..bars.len()).collect();
    order.sort_by_key(|&index| (bars[index].start_column, index));

    let mut lane_last_end = SmallVec::<[u32; 8]>::new();
    let mut lanes = vec![Lane::FIRST; bars.len()];
    for index in order {
        let bar = bars[index];
        lanes[index] = allocate_lane(&mut lane_last_end, bar);
    }
    lanes
}

/// Number of lanes needed to hold the given assignment, saturating at `u32::MAX`.
#[must_use]
pub fn lane_count(lanes: &[Lane]) -> u32 {
    lanes
        .iter()
        .map(|lane| lane.index().saturating_add(1))
        .max()
        .unwrap_or(0)
}

fn allocate_lane(last_end: &mut SmallVec<[u32; 8]>, bar: PositionedBar) -> Lane {
    for (lane, lane_last_end) in last_end.iter_mut().enumerate() {
        if bar.start_column > *lane_last_end {
            *lane_last_end = bar.end_column;
            return Lane(lane as u32);
        }
    }
    last_end.push(bar.end_column);
    Lane((last_end.len() - 1) as u32)
}
