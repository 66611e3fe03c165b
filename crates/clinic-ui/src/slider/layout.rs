//! Card layout for the gallery track

use serde::Serialize;

/// Scale of the card in focus
const ACTIVE_SCALE: f32 = 1.0;
/// Scale of every other card
const INACTIVE_SCALE: f32 = 0.85;
const ACTIVE_OPACITY: f32 = 1.0;
const INACTIVE_OPACITY: f32 = 0.5;
/// Y rotation per slide of distance from the current one
const ROTATE_Y_PER_SLIDE_DEG: f32 = 5.0;
/// Parallax factor applied to the drag offset per slide of distance
const PARALLAX_PER_SLIDE: f32 = 0.1;

/// Visual pose of one card relative to the current slide
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPose {
    pub scale: f32,
    pub opacity: f32,
    pub rotate_y_deg: f32,
    pub parallax_x: f32,
}

/// Horizontal distance between slide origins for a viewport width
pub fn slide_stride(viewport_width: f32) -> f32 {
    if viewport_width > 1024.0 {
        564.0
    } else if viewport_width > 768.0 {
        432.0
    } else {
        viewport_width * 0.9 + 16.0
    }
}

/// X translation of the whole track
pub fn track_offset(current_index: usize, stride: f32, drag_offset: f32) -> f32 {
    -(current_index as f32) * stride + drag_offset
}

/// Pose of the card at `index` while `current_index` is in focus
pub fn card_pose(index: usize, current_index: usize, drag_offset: f32) -> CardPose {
    let distance = index as f32 - current_index as f32;
    let active = index == current_index;

    CardPose {
        scale: if active { ACTIVE_SCALE } else { INACTIVE_SCALE },
        opacity: if active { ACTIVE_OPACITY } else { INACTIVE_OPACITY },
        rotate_y_deg: distance * ROTATE_Y_PER_SLIDE_DEG,
        parallax_x: drag_offset * (PARALLAX_PER_SLIDE * (distance + 1.0)),
    }
}

/// Counter text such as `"03 / 07"`
pub fn position_label(current_index: usize, total: usize) -> String {
    format!("{:02} / {:02}", current_index + 1, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_breakpoints() {
        assert!((slide_stride(1440.0) - 564.0).abs() < 0.001);
        assert!((slide_stride(1024.0) - 432.0).abs() < 0.001);
        assert!((slide_stride(800.0) - 432.0).abs() < 0.001);
        assert!((slide_stride(400.0) - 376.0).abs() < 0.001);
    }

    #[test]
    fn test_track_offset_follows_drag() {
        assert!((track_offset(2, 564.0, 0.0) - (-1128.0)).abs() < 0.001);
        assert!((track_offset(2, 564.0, -40.0) - (-1168.0)).abs() < 0.001);
    }

    #[test]
    fn test_active_card_pose() {
        let pose = card_pose(3, 3, 0.0);
        assert!((pose.scale - 1.0).abs() < 0.001);
        assert!((pose.opacity - 1.0).abs() < 0.001);
        assert!(pose.rotate_y_deg.abs() < 0.001);
    }

    #[test]
    fn test_neighbour_card_pose() {
        let pose = card_pose(4, 3, -100.0);
        assert!((pose.scale - 0.85).abs() < 0.001);
        assert!((pose.opacity - 0.5).abs() < 0.001);
        assert!((pose.rotate_y_deg - 5.0).abs() < 0.001);
        assert!((pose.parallax_x - (-20.0)).abs() < 0.001);
    }

    #[test]
    fn test_position_label_is_zero_padded() {
        assert_eq!(position_label(2, 7), "03 / 07");
        assert_eq!(position_label(11, 12), "12 / 12");
    }
}
