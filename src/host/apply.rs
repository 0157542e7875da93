use crate::{
    foundation::{
        core::{FrameNumber, frame_number},
        error::GriplineResult,
    },
    host::adapter::{KeyedProperty, ObjectId, SceneAdapter},
    timeline::synth::Timeline,
};

/// Host frame range for a timeline, widened outward so every key fits.
pub fn host_frame_range(timeline: &Timeline) -> (FrameNumber, FrameNumber) {
    (
        timeline.frame_start.floor() as FrameNumber,
        timeline.frame_end.ceil() as FrameNumber,
    )
}

/// Key every timeline entry on `object`, then set the animation range.
///
/// Keys whose times round to the same frame are all inserted; the host
/// decides how to collapse them.
#[tracing::instrument(skip(adapter, timeline), fields(keys = timeline.keyframes.len()))]
pub fn apply_timeline<A: SceneAdapter + ?Sized>(
    adapter: &mut A,
    object: &ObjectId,
    timeline: &Timeline,
) -> GriplineResult<(FrameNumber, FrameNumber)> {
    for key in &timeline.keyframes {
        adapter.insert_keyframe(
            object,
            frame_number(key.time),
            &KeyedProperty::Location(key.pose),
        )?;
    }
    let (start, end) = host_frame_range(timeline);
    adapter.set_animation_range(start, end)?;
    Ok((start, end))
}

#[cfg(test)]
#[path = "../../tests/unit/host/apply.rs"]
mod tests;
